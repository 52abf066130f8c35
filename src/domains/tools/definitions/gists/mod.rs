//! GitHub Gist tool definitions, one file per tool.

pub mod common;
pub mod create;
pub mod delete;
pub mod fork;
pub mod get;
pub mod list;
pub mod list_public;
pub mod list_starred;
pub mod star;
pub mod unstar;
pub mod update;

pub use create::{CreateGistParams, CreateGistTool};
pub use delete::{DeleteGistParams, DeleteGistTool};
pub use fork::{ForkGistParams, ForkGistTool};
pub use get::{GetGistParams, GetGistTool};
pub use list::{ListGistsParams, ListGistsTool};
pub use list_public::{ListPublicGistsParams, ListPublicGistsTool};
pub use list_starred::{ListStarredGistsParams, ListStarredGistsTool};
pub use star::{StarGistParams, StarGistTool};
pub use unstar::{UnstarGistParams, UnstarGistTool};
pub use update::{UpdateGistParams, UpdateGistTool};
