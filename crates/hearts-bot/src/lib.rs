pub mod bot;
pub mod policy;

pub use bot::{
    BotDifficulty, PassPlanner, PlayDecision, PlayPlanner, evaluate_card_danger,
    evaluate_card_safety, select_ai_card_to_play, select_ai_cards_to_pass,
};
pub use policy::{HeuristicPolicy, Policy, PolicyContext, policy_for};
