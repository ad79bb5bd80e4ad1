use vimeo_api::types::{
    normalize, Category, Channel, Feed, Group, ListEnvelope, User, Video,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_user_full() {
    let json = load_fixture("user.json");
    let user: User = serde_json::from_str(&json).unwrap();
    assert_eq!(user.uri, "/users/42");
    assert_eq!(user.id(), Some("42"));
    assert_eq!(user.name, "Jane Doe");
    assert_eq!(user.location.as_deref(), Some("Lisbon"));
    assert_eq!(user.account.as_deref(), Some("pro"));
    assert_eq!(
        user.created_time.unwrap().to_rfc3339(),
        "2014-07-17T18:40:13+00:00"
    );
    assert_eq!(user.websites.len(), 1);
    assert_eq!(user.websites[0].name.as_deref(), Some("Portfolio"));
    assert!(user.websites[0].description.is_none());
    assert_eq!(user.content_filter, vec!["language", "drugs"]);

    let pictures = user.pictures.unwrap();
    assert!(pictures.active);
    assert_eq!(pictures.largest().unwrap().width, 300);
}

#[test]
fn deserialize_user_minimal() {
    let user: User = serde_json::from_str(r#"{"uri": "/users/1"}"#).unwrap();
    assert_eq!(user.name, "");
    assert!(user.pictures.is_none());
    assert!(user.websites.is_empty());
}

#[test]
fn deserialize_followers_page() {
    let json = load_fixture("followers.json");
    let resp: ListEnvelope<User> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 2);
    // Server order, not sorted by name or id.
    assert_eq!(resp.data[0].name, "Zed");
    assert_eq!(resp.data[1].name, "Amy");

    let paging = normalize(&resp.pagination).unwrap();
    assert_eq!(paging.total, 57);
    assert_eq!(paging.page, 2);
    assert_eq!(paging.per_page, 10);
    assert_eq!(paging.total_pages(), 6);
}

#[test]
fn deserialize_feed() {
    let json = load_fixture("feed.json");
    let resp: ListEnvelope<Feed> = serde_json::from_str(&json).unwrap();
    let clip = resp.data[0].clip.as_ref().unwrap();
    assert_eq!(clip.uri, "/videos/76979871");
    assert_eq!(clip.duration, 62);
    assert_eq!(clip.width, 1280);
    assert!(!normalize(&resp.pagination).unwrap().has_next());
}

#[test]
fn deserialize_categories() {
    let json = load_fixture("categories.json");
    let resp: ListEnvelope<Category> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 2);
    assert!(resp.data.iter().all(|c| c.top_level));
    assert_eq!(resp.data[1].name, "Documentary");
}

#[test]
fn deserialize_channels_and_groups() {
    let channels: ListEnvelope<Channel> =
        serde_json::from_str(&load_fixture("channels.json")).unwrap();
    assert_eq!(channels.data[0].name, "Staff Picks");
    assert!(channels.data[0].created_time.is_some());

    let groups: ListEnvelope<Group> = serde_json::from_str(&load_fixture("groups.json")).unwrap();
    assert_eq!(groups.data[0].uri, "/groups/motion");
    assert!(groups.data[0].created_time.is_none());
    // No `paging` links, but counts are there.
    let paging = normalize(&groups.pagination).unwrap();
    assert_eq!(paging.total, 1);
    assert!(paging.next.is_none());
}

#[test]
fn deserialize_empty_appearances() {
    let resp: ListEnvelope<Video> =
        serde_json::from_str(&load_fixture("appearances.json")).unwrap();
    assert!(resp.data.is_empty());
    let paging = normalize(&resp.pagination).unwrap();
    assert_eq!(paging.total, 0);
    assert_eq!(paging.total_pages(), 0);
}

#[test]
fn unpaged_list_has_no_descriptor() {
    let resp: ListEnvelope<User> =
        serde_json::from_str(&load_fixture("unpaged_users.json")).unwrap();
    assert_eq!(resp.data.len(), 1);
    assert!(normalize(&resp.pagination).is_none());
}

#[test]
fn single_entity_is_not_a_list() {
    let result = serde_json::from_str::<ListEnvelope<User>>(&load_fixture("user.json"));
    assert!(result.is_err());
}
