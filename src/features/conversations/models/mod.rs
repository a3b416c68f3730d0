mod conversation_state;
mod courier;
mod shipment_request;

pub use conversation_state::{
    ConversationForm, ConversationState, DialogueError, DialogueInput, DialogueStep, Transition,
};
pub use courier::Courier;
pub use shipment_request::ShipmentRequest;
