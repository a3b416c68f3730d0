pub mod session_handler;

pub use session_handler::{
    __path_get_results, __path_get_selection, __path_get_shipping_estimates,
    __path_select_address, get_results, get_selection, get_shipping_estimates, select_address,
    SessionState,
};
