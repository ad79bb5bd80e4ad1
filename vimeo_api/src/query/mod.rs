mod common;
pub use self::common::{add_options, ListOptions, Query, SortDirection};

mod user;
pub use self::user::ListUserOptions;

mod video;
pub use self::video::ListVideoOptions;

mod channel;
pub use self::channel::ListChannelOptions;

mod group;
pub use self::group::ListGroupOptions;

mod category;
pub use self::category::{ListCategoryOptions, ListFeedOptions};
