use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use vimeo_api::types::UserRequest;
use vimeo_api::{
    Client, ListCategoryOptions, ListChannelOptions, ListFeedOptions, ListGroupOptions,
    ListOptions, ListUserOptions, ListVideoOptions, Response, SortDirection, Subject,
};

use crate::output::{
    page_summary, print_categories, print_channels, print_feed, print_groups, print_users,
    print_videos, OutputFormat,
};

#[derive(Args)]
pub struct UsersArgs {
    /// User id to act on; omitted means the owner of the access token.
    /// Not accepted by `search`.
    #[arg(long, global = true)]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Subcommand)]
pub enum UsersCommand {
    /// Show a user profile
    Get,
    /// Edit a user profile; only the given fields change
    Edit(EditArgs),
    /// Search all users
    Search(SearchArgs),
    /// Videos the user appears in
    Appearances(SearchArgs),
    /// Categories the user follows
    Categories(PageArgs),
    /// Channels the user subscribes to
    Channels(SearchArgs),
    /// The user's activity feed
    Feed(PageArgs),
    /// Users following this user
    Followers(SearchArgs),
    /// Users this user follows
    Following(SearchArgs),
    /// Groups the user has joined
    Groups(SearchArgs),
    /// Follow another user
    Follow { target: String },
    /// Stop following a user
    Unfollow { target: String },
    /// Subscribe to a category
    SubscribeCategory { category: String },
    /// Unsubscribe from a category
    UnsubscribeCategory { category: String },
    /// Subscribe to a channel
    SubscribeChannel { channel: String },
    /// Unsubscribe from a channel
    UnsubscribeChannel { channel: String },
    /// Join a group
    JoinGroup { group: String },
    /// Leave a group
    LeaveGroup { group: String },
}

#[derive(Args)]
pub struct EditArgs {
    /// New display name
    #[arg(long)]
    pub name: Option<String>,

    /// New location
    #[arg(long, conflicts_with = "clear_location")]
    pub location: Option<String>,

    /// New bio
    #[arg(long, conflicts_with = "clear_bio")]
    pub bio: Option<String>,

    /// Remove the location
    #[arg(long)]
    pub clear_location: bool,

    /// Remove the bio
    #[arg(long)]
    pub clear_bio: bool,
}

#[derive(Args)]
pub struct PageArgs {
    /// Page number
    #[arg(long)]
    pub page: Option<u32>,

    /// Results per page
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Sort field (e.g. date, alphabetical)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort direction: asc or desc
    #[arg(long)]
    pub direction: Option<String>,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Free-text search
    #[arg(long)]
    pub query: Option<String>,

    /// Filter tag
    #[arg(long)]
    pub filter: Option<String>,

    #[command(flatten)]
    pub page: PageArgs,
}

impl PageArgs {
    fn list_options(&self) -> Result<ListOptions> {
        let direction = match &self.direction {
            Some(d) => match d.parse::<SortDirection>() {
                Ok(d) => Some(d),
                Err(()) => bail!("invalid direction `{}`: expected asc or desc", d),
            },
            None => None,
        };
        Ok(ListOptions {
            page: self.page,
            per_page: self.per_page,
            sort: self.sort.clone(),
            direction,
        })
    }
}

impl EditArgs {
    fn request(&self) -> UserRequest {
        let mut req = UserRequest::default();
        if let Some(name) = &self.name {
            req = req.with_name(name);
        }
        if let Some(location) = &self.location {
            req = req.with_location(location);
        }
        if let Some(bio) = &self.bio {
            req = req.with_bio(bio);
        }
        if self.clear_location {
            req = req.clear_location();
        }
        if self.clear_bio {
            req = req.clear_bio();
        }
        req
    }
}

impl UsersArgs {
    /// `search` is not scoped to a user.
    fn validate(&self) -> Result<()> {
        if self.user.is_some() && matches!(self.command, UsersCommand::Search(_)) {
            bail!("--user does not apply to `search`, which covers all users");
        }
        Ok(())
    }
}

pub async fn run(args: &UsersArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    args.validate()?;
    let subject = Subject::from_optional(args.user.as_deref());
    let users = client.users();
    let format = *format;

    match &args.command {
        UsersCommand::Get => {
            let (user, _) = users
                .get(&subject)
                .await
                .with_context(|| format!("fetching user {}", subject))?;
            print_users(&[user], format)?;
        }
        UsersCommand::Edit(edit) => {
            let req = edit.request();
            if req.is_empty() {
                bail!("nothing to edit: pass --name, --location, --bio or a --clear-* flag");
            }
            let (user, _) = users
                .edit(&subject, &req)
                .await
                .with_context(|| format!("editing user {}", subject))?;
            print_users(&[user], format)?;
        }
        UsersCommand::Search(search) => {
            let opts = ListUserOptions {
                query: search.query.clone(),
                filter: search.filter.clone(),
                list: search.page.list_options()?,
            };
            let (found, resp) = users.search(Some(&opts)).await?;
            summarize(&resp, "users");
            print_users(&found, format)?;
        }
        UsersCommand::Appearances(search) => {
            let opts = ListVideoOptions {
                query: search.query.clone(),
                filter: search.filter.clone(),
                filter_embeddable: false,
                list: search.page.list_options()?,
            };
            let (videos, resp) = users.list_appearance(&subject, Some(&opts)).await?;
            summarize(&resp, "videos");
            print_videos(&videos, format)?;
        }
        UsersCommand::Categories(page) => {
            let opts = ListCategoryOptions {
                list: page.list_options()?,
            };
            let (categories, resp) = users.list_category(&subject, Some(&opts)).await?;
            summarize(&resp, "categories");
            print_categories(&categories, format)?;
        }
        UsersCommand::Channels(search) => {
            let opts = ListChannelOptions {
                query: search.query.clone(),
                filter: search.filter.clone(),
                list: search.page.list_options()?,
            };
            let (channels, resp) = users.list_channel(&subject, Some(&opts)).await?;
            summarize(&resp, "channels");
            print_channels(&channels, format)?;
        }
        UsersCommand::Feed(page) => {
            let opts = ListFeedOptions {
                list: page.list_options()?,
            };
            let (feed, resp) = users.feed(&subject, Some(&opts)).await?;
            summarize(&resp, "feed items");
            print_feed(&feed, format)?;
        }
        UsersCommand::Followers(search) => {
            let opts = user_options(search)?;
            let (followers, resp) = users.list_follower(&subject, Some(&opts)).await?;
            summarize(&resp, "followers");
            print_users(&followers, format)?;
        }
        UsersCommand::Following(search) => {
            let opts = user_options(search)?;
            let (followed, resp) = users.list_followed(&subject, Some(&opts)).await?;
            summarize(&resp, "followed users");
            print_users(&followed, format)?;
        }
        UsersCommand::Groups(search) => {
            let opts = ListGroupOptions {
                query: search.query.clone(),
                filter: search.filter.clone(),
                list: search.page.list_options()?,
            };
            let (groups, resp) = users.list_group(&subject, Some(&opts)).await?;
            summarize(&resp, "groups");
            print_groups(&groups, format)?;
        }
        UsersCommand::Follow { target } => {
            report(users.follow_user(&subject, target).await?, "follow", target);
        }
        UsersCommand::Unfollow { target } => {
            report(users.unfollow_user(&subject, target).await?, "unfollow", target);
        }
        UsersCommand::SubscribeCategory { category } => {
            let resp = users.subscribe_category(&subject, category).await?;
            report(resp, "subscribe to category", category);
        }
        UsersCommand::UnsubscribeCategory { category } => {
            let resp = users.unsubscribe_category(&subject, category).await?;
            report(resp, "unsubscribe from category", category);
        }
        UsersCommand::SubscribeChannel { channel } => {
            let resp = users.subscribe_channel(&subject, channel).await?;
            report(resp, "subscribe to channel", channel);
        }
        UsersCommand::UnsubscribeChannel { channel } => {
            let resp = users.unsubscribe_channel(&subject, channel).await?;
            report(resp, "unsubscribe from channel", channel);
        }
        UsersCommand::JoinGroup { group } => {
            report(users.join_group(&subject, group).await?, "join group", group);
        }
        UsersCommand::LeaveGroup { group } => {
            report(users.leave_group(&subject, group).await?, "leave group", group);
        }
    }

    Ok(())
}

fn user_options(search: &SearchArgs) -> Result<ListUserOptions> {
    Ok(ListUserOptions {
        query: search.query.clone(),
        filter: search.filter.clone(),
        list: search.page.list_options()?,
    })
}

fn summarize(resp: &Response, noun: &str) {
    eprintln!("{}", page_summary(resp.pagination.as_ref(), noun));
}

fn report(resp: Response, action: &str, target: &str) {
    tracing::info!("{} {}: HTTP {}", action, target, resp.status);
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn page_args(direction: Option<&str>) -> PageArgs {
        PageArgs {
            page: Some(2),
            per_page: None,
            sort: None,
            direction: direction.map(str::to_string),
        }
    }

    #[test]
    fn page_args_map_to_list_options() {
        let opts = page_args(Some("asc")).list_options().unwrap();
        assert_eq!(opts.page, Some(2));
        assert_eq!(opts.per_page, None);
        assert_eq!(opts.direction, Some(SortDirection::Asc));
    }

    #[test]
    fn bad_direction_is_rejected() {
        assert!(page_args(Some("sideways")).list_options().is_err());
    }

    fn search_args() -> SearchArgs {
        SearchArgs {
            query: Some("jane".to_string()),
            filter: None,
            page: page_args(None),
        }
    }

    #[test]
    fn user_flag_is_rejected_for_search() {
        let args = UsersArgs {
            user: Some("42".to_string()),
            command: UsersCommand::Search(search_args()),
        };
        assert!(args.validate().is_err());

        let args = UsersArgs {
            user: None,
            command: UsersCommand::Search(search_args()),
        };
        assert!(args.validate().is_ok());

        let args = UsersArgs {
            user: Some("42".to_string()),
            command: UsersCommand::Followers(search_args()),
        };
        assert!(args.validate().is_ok());
    }

    #[test]
    fn edit_args_only_send_given_fields() {
        let args = EditArgs {
            name: Some("Jane".to_string()),
            location: None,
            bio: None,
            clear_location: false,
            clear_bio: true,
        };
        assert_eq!(
            serde_json::to_value(args.request()).unwrap(),
            json!({"name": "Jane", "bio": null})
        );
    }
}
