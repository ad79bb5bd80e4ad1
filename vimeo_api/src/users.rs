//! User-centric operations: profile, social graph, subscriptions, feed.
//!
//! Every operation takes a [`Subject`]: [`Subject::Me`] targets the owner of
//! the access token (`me/...`), [`Subject::Id`] another user (`users/{id}/...`).

use reqwest::Method;

use crate::{
    client::{Client, Response},
    path::{escape_segment, resolve, Subject},
    query::{
        ListCategoryOptions, ListChannelOptions, ListFeedOptions, ListGroupOptions,
        ListUserOptions, ListVideoOptions,
    },
    types::{Category, Channel, Feed, Group, User, UserRequest, Video},
    Error,
};

/// Operations on `/me` and `/users/{id}`. Obtained from [`Client::users`].
pub struct UsersService<'a> {
    client: &'a Client,
}

/// `me[/suffix]` or `users/{id}[/suffix]`.
fn user_path(subject: &Subject, suffix: &str) -> Result<String, Error> {
    if suffix.is_empty() {
        resolve(subject, "me", "users/{id}")
    } else {
        resolve(
            subject,
            &format!("me/{}", suffix),
            &format!("users/{{id}}/{}", suffix),
        )
    }
}

/// Path of one related resource, e.g. `me/categories/animation`.
fn relation_path(subject: &Subject, relation: &str, target: &str) -> Result<String, Error> {
    user_path(subject, &format!("{}/{}", relation, escape_segment(target)?))
}

impl<'a> UsersService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Searches all users.
    pub async fn search(
        &self,
        options: Option<&ListUserOptions>,
    ) -> Result<(Vec<User>, Response), Error> {
        self.client.fetch_list("users", options).await
    }

    /// Fetches one user profile.
    pub async fn get(&self, subject: &Subject) -> Result<(User, Response), Error> {
        self.client
            .fetch::<User, ()>(Method::GET, &user_path(subject, "")?, None)
            .await
    }

    /// Edits a profile. Only fields not left at [`crate::types::Patch::Keep`] are sent.
    pub async fn edit(
        &self,
        subject: &Subject,
        request: &UserRequest,
    ) -> Result<(User, Response), Error> {
        self.client
            .fetch(Method::PATCH, &user_path(subject, "")?, Some(request))
            .await
    }

    /// Lists all videos a user is credited in.
    pub async fn list_appearance(
        &self,
        subject: &Subject,
        options: Option<&ListVideoOptions>,
    ) -> Result<(Vec<Video>, Response), Error> {
        self.client
            .fetch_list(&user_path(subject, "appearances")?, options)
            .await
    }

    /// Lists the categories a user follows.
    pub async fn list_category(
        &self,
        subject: &Subject,
        options: Option<&ListCategoryOptions>,
    ) -> Result<(Vec<Category>, Response), Error> {
        self.client
            .fetch_list(&user_path(subject, "categories")?, options)
            .await
    }

    pub async fn subscribe_category(
        &self,
        subject: &Subject,
        category: &str,
    ) -> Result<Response, Error> {
        self.client
            .toggle(Method::PUT, &relation_path(subject, "categories", category)?)
            .await
    }

    pub async fn unsubscribe_category(
        &self,
        subject: &Subject,
        category: &str,
    ) -> Result<Response, Error> {
        self.client
            .toggle(Method::DELETE, &relation_path(subject, "categories", category)?)
            .await
    }

    /// Lists the channels a user is subscribed to.
    pub async fn list_channel(
        &self,
        subject: &Subject,
        options: Option<&ListChannelOptions>,
    ) -> Result<(Vec<Channel>, Response), Error> {
        self.client
            .fetch_list(&user_path(subject, "channels")?, options)
            .await
    }

    pub async fn subscribe_channel(
        &self,
        subject: &Subject,
        channel: &str,
    ) -> Result<Response, Error> {
        self.client
            .toggle(Method::PUT, &relation_path(subject, "channels", channel)?)
            .await
    }

    pub async fn unsubscribe_channel(
        &self,
        subject: &Subject,
        channel: &str,
    ) -> Result<Response, Error> {
        self.client
            .toggle(Method::DELETE, &relation_path(subject, "channels", channel)?)
            .await
    }

    /// Lists a user's activity feed.
    pub async fn feed(
        &self,
        subject: &Subject,
        options: Option<&ListFeedOptions>,
    ) -> Result<(Vec<Feed>, Response), Error> {
        self.client
            .fetch_list(&user_path(subject, "feed")?, options)
            .await
    }

    /// Lists the users following `subject`.
    pub async fn list_follower(
        &self,
        subject: &Subject,
        options: Option<&ListUserOptions>,
    ) -> Result<(Vec<User>, Response), Error> {
        self.client
            .fetch_list(&user_path(subject, "followers")?, options)
            .await
    }

    /// Lists the users `subject` follows.
    pub async fn list_followed(
        &self,
        subject: &Subject,
        options: Option<&ListUserOptions>,
    ) -> Result<(Vec<User>, Response), Error> {
        self.client
            .fetch_list(&user_path(subject, "following")?, options)
            .await
    }

    pub async fn follow_user(&self, subject: &Subject, user_id: &str) -> Result<Response, Error> {
        self.client
            .toggle(Method::PUT, &relation_path(subject, "following", user_id)?)
            .await
    }

    pub async fn unfollow_user(&self, subject: &Subject, user_id: &str) -> Result<Response, Error> {
        self.client
            .toggle(Method::DELETE, &relation_path(subject, "following", user_id)?)
            .await
    }

    /// Lists the groups a user has joined.
    pub async fn list_group(
        &self,
        subject: &Subject,
        options: Option<&ListGroupOptions>,
    ) -> Result<(Vec<Group>, Response), Error> {
        self.client
            .fetch_list(&user_path(subject, "groups")?, options)
            .await
    }

    pub async fn join_group(&self, subject: &Subject, group_id: &str) -> Result<Response, Error> {
        self.client
            .toggle(Method::PUT, &relation_path(subject, "groups", group_id)?)
            .await
    }

    pub async fn leave_group(&self, subject: &Subject, group_id: &str) -> Result<Response, Error> {
        self.client
            .toggle(Method::DELETE, &relation_path(subject, "groups", group_id)?)
            .await
    }
}
