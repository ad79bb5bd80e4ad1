mod meta;
pub use self::meta::{normalize, ListEnvelope, Pagination, PagingLinks, RawPagination};

mod picture;
pub use self::picture::{PictureSize, Pictures};

mod user;
pub use self::user::{Patch, User, UserRequest, WebSite};

mod video;
pub use self::video::Video;

mod category;
pub use self::category::Category;

mod channel;
pub use self::channel::Channel;

mod group;
pub use self::group::Group;

mod feed;
pub use self::feed::Feed;
