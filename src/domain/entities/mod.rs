//! Domain entities - Core business objects with no external dependencies

pub mod command;
pub mod member;
pub mod message;
pub mod presence;
pub mod profile_link;

pub use command::{find_command, CommandSpec, DirectoryCommand, COMMANDS};
pub use member::Member;
pub use message::{Content, Message, Sender};
pub use presence::{PresenceStatus, ONLINE_PRESENCE_TYPE};
pub use profile_link::extract_user_id;
