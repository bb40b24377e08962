pub mod config;
pub mod error;
pub mod id;
pub mod manager;
pub mod object;
pub mod unit;

pub use config::{BlockedPolicy, ManagerConfig};
pub use error::{ObjectError, ObjectResult};
pub use id::{IdGenerator, ObjectId};
pub use manager::ObjectManager;
pub use object::{GameObject, ObjectKind};
pub use unit::{Motion, Unit};
