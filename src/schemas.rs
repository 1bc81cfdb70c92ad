//! Entity record types, one per store collection.
//!
//! Each type carries its collection name and the field constraints checked
//! before anything is written. Referential fields (`author_id`, `post_id`,
//! ...) are opaque strings; nothing verifies the referenced document exists.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use url::Url;
use validator::Validate;

fn default_true() -> bool {
    true
}

fn default_theme() -> Option<String> {
    Some("light".to_string())
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_expire_seconds() -> Option<i64> {
    Some(3600)
}

/// Audience for a post or a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Followers,
    Subscribers,
    Private,
}

// URL-valued fields are `url::Url` so a malformed value is rejected while
// the payload is decoded, named field included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSettings {
    pub bio: Option<String>,
    pub avatar_url: Option<Url>,
    pub banner_url: Option<Url>,
    #[serde(default = "default_theme")]
    pub theme: Option<String>,
    pub links: Option<Vec<Url>>,
    #[serde(default)]
    pub privacy_level: Visibility,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    pub username: String,
    #[validate(email)]
    pub email: String,
    pub name: Option<String>,
    pub settings: Option<ProfileSettings>,
    #[serde(default = "default_true")]
    pub is_creator: bool,
    #[serde(default)]
    pub verified: bool,
}

impl User {
    pub const COLLECTION: &'static str = "user";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    #[default]
    Bronze,
    Silver,
    Gold,
    Platinum,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubscriptionPlan {
    pub creator_id: String,
    pub title: String,
    #[validate(range(min = 0))]
    pub price_cents: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub tier: PlanTier,
}

impl SubscriptionPlan {
    pub const COLLECTION: &'static str = "subscriptionplan";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    #[default]
    Active,
    Canceled,
    PastDue,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Subscription {
    pub creator_id: String,
    pub subscriber_id: String,
    pub plan_id: String,
    #[serde(default)]
    pub status: SubscriptionStatus,
    pub renews_at: Option<String>,
}

impl Subscription {
    pub const COLLECTION: &'static str = "subscription";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentPurpose {
    #[default]
    Subscription,
    Tip,
    Purchase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentProvider {
    Stripe,
    Paypal,
    #[default]
    Mock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Initiated,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Payment {
    pub user_id: String,
    pub amount_cents: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub purpose: PaymentPurpose,
    #[serde(default)]
    pub provider: PaymentProvider,
    #[serde(default)]
    pub status: PaymentStatus,
    pub metadata: Option<HashMap<String, String>>,
}

impl Payment {
    pub const COLLECTION: &'static str = "payment";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Text,
    Image,
    ShortVideo,
    LiveStream,
    Audio,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrmPolicy {
    #[serde(default = "default_true")]
    pub watermark: bool,
    #[serde(default = "default_expire_seconds")]
    pub expire_seconds: Option<i64>,
    #[serde(default)]
    pub allow_download: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Post {
    pub author_id: String,
    pub content_type: ContentType,
    pub text: Option<String>,
    pub media_url: Option<Url>,
    pub thumbnail_url: Option<Url>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_premium: bool,
    pub required_tier: Option<String>,
    pub drm: Option<DrmPolicy>,
    #[serde(default)]
    pub visibility: Visibility,
}

impl Post {
    pub const COLLECTION: &'static str = "post";
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Comment {
    pub post_id: String,
    pub author_id: String,
    pub text: String,
}

impl Comment {
    pub const COLLECTION: &'static str = "comment";
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Like {
    pub post_id: String,
    pub user_id: String,
}

impl Like {
    pub const COLLECTION: &'static str = "like";
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Message {
    pub sender_id: String,
    pub recipient_id: String,
    pub body: String,
    pub thread_id: Option<String>,
}

impl Message {
    pub const COLLECTION: &'static str = "message";
}

/// Schema only — no endpoint exposes groups yet.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Group {
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub members: Vec<String>,
}

impl Group {
    pub const COLLECTION: &'static str = "group";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Like,
    Comment,
    Message,
    Subscription,
    System,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Notification {
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub body: Option<String>,
    #[serde(default)]
    pub read: bool,
}

impl Notification {
    pub const COLLECTION: &'static str = "notification";
}

/// Lifecycle shared by live streams and audio rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LiveStatus {
    #[default]
    Scheduled,
    Live,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StreamAccess {
    #[default]
    Public,
    Subscribers,
    PayPerView,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Stream {
    pub creator_id: String,
    pub title: String,
    #[serde(default)]
    pub status: LiveStatus,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    #[serde(default)]
    pub access: StreamAccess,
}

impl Stream {
    pub const COLLECTION: &'static str = "stream";
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AudioRoom {
    pub host_id: String,
    pub topic: String,
    #[serde(default)]
    pub status: LiveStatus,
    #[serde(default)]
    pub speakers: Vec<String>,
}

impl AudioRoom {
    pub const COLLECTION: &'static str = "audioroom";
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyticsEvent {
    pub user_id: Option<String>,
    pub event_name: String,
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

impl AnalyticsEvent {
    pub const COLLECTION: &'static str = "analyticsevent";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchDocType {
    User,
    Post,
    Group,
}

/// Schema only — declared for a future indexer, never populated or queried.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchIndex {
    pub doc_type: SearchDocType,
    pub ref_id: String,
    pub tokens: Vec<String>,
}

impl SearchIndex {
    pub const COLLECTION: &'static str = "searchindex";
}
