mod session;

pub use session::{ResultSet, Session};
