pub mod conversation_handler;

pub use conversation_handler::{
    __path_cancel_conversation, __path_choose_cod, __path_choose_courier, __path_get_conversation,
    __path_start_conversation, cancel_conversation, choose_cod, choose_courier, get_conversation,
    start_conversation,
};
