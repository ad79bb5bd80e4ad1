//! Async client for the user-centric endpoints of the Vimeo REST API.
//!
//! ```no_run
//! use vimeo_api::{Client, Config, ListUserOptions, Query, Subject};
//!
//! # async fn run() -> Result<(), vimeo_api::Error> {
//! let client = Client::new(Config::default().with_access_token("token"))?;
//! let (me, _) = client.users().get(&Subject::Me).await?;
//! let opts = ListUserOptions::default().with_page(2).with_per_page(10);
//! let (followers, resp) = client
//!     .users()
//!     .list_follower(&Subject::id("42"), Some(&opts))
//!     .await?;
//! println!("{} has {} followers on this page", me.name, followers.len());
//! if let Some(paging) = resp.pagination {
//!     println!("page {} of {}", paging.page, paging.total_pages());
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod errors;
pub mod path;
mod query;
pub mod transport;
pub mod types;
mod users;
pub use self::client::{Client, Response};
pub use self::errors::{BoxError, Error};
pub use self::path::Subject;
pub use self::query::{
    add_options, ListCategoryOptions, ListChannelOptions, ListFeedOptions, ListGroupOptions,
    ListOptions, ListUserOptions, ListVideoOptions, Query, SortDirection,
};
pub use self::transport::{Config, HttpTransport, RawResponse, Transport, TransportRequest};
pub use self::users::UsersService;

pub use reqwest::Method;
