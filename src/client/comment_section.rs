// src/client/comment_section.rs

use chrono::{DateTime, Utc};

use crate::client::api::{ApiClient, ClientError};
use crate::client::providers::SessionContext;
use crate::models::comment::{AuthorResponse, CommentResponse};

/// Fixed error text shown under the composer after a failed post.
const SUBMIT_ERROR: &str = "Failed to post comment";

/// Handle for an in-flight comment list load.
///
/// Carries the generation it was issued under; a load finished against a
/// newer generation is dropped instead of applied.
#[derive(Debug, Clone, Copy)]
pub struct LoadTicket {
    article_id: i64,
    generation: u64,
}

impl LoadTicket {
    pub fn article_id(&self) -> i64 {
        self.article_id
    }
}

/// View state for the comment section of one article.
#[derive(Debug, Clone)]
pub struct CommentSection {
    pub article_id: i64,
    /// Live comment list, newest first.
    pub comments: Vec<CommentResponse>,
    /// Composer input.
    pub new_comment: String,
    pub is_submitting: bool,
    pub error: Option<String>,
    load_generation: u64,
}

impl CommentSection {
    pub fn new(article_id: i64) -> Self {
        Self {
            article_id,
            comments: Vec::new(),
            new_comment: String::new(),
            is_submitting: false,
            error: None,
            load_generation: 0,
        }
    }

    /// Points the view at a different article.
    ///
    /// Bumps the load generation so responses still in flight for the
    /// previous article are discarded when they land.
    pub fn set_article(&mut self, article_id: i64) {
        if self.article_id != article_id {
            self.article_id = article_id;
            self.load_generation += 1;
        }
    }

    /// Starts a list load for the current article.
    pub fn begin_load(&self) -> LoadTicket {
        LoadTicket {
            article_id: self.article_id,
            generation: self.load_generation,
        }
    }

    /// Applies a finished list load.
    ///
    /// Fetch failures are logged only; the view keeps whatever list it
    /// already had.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<CommentResponse>, ClientError>,
    ) {
        if ticket.generation != self.load_generation {
            return;
        }

        match result {
            Ok(comments) => self.comments = comments,
            Err(e) => tracing::error!("Failed to fetch comments: {e}"),
        }
    }

    /// Fetches and applies the comment list in one step.
    pub async fn load(&mut self, api: &ApiClient) {
        let ticket = self.begin_load();
        let result = api.fetch_comments(ticket.article_id()).await;
        self.finish_load(ticket, result);
    }

    /// The composer is only rendered for an authenticated session.
    pub fn composer_visible(&self, session: &SessionContext) -> bool {
        session.is_authenticated()
    }

    /// Whether the submit affordance is enabled.
    pub fn can_submit(&self, session: &SessionContext) -> bool {
        session.is_authenticated() && !self.is_submitting && !self.new_comment.trim().is_empty()
    }

    /// Posts the composer content.
    ///
    /// On success the returned comment is prepended and the input is
    /// cleared; on failure the fixed error text is set and the input is
    /// left untouched. `is_submitting` is reset on both paths.
    pub async fn submit(&mut self, api: &ApiClient, session: &SessionContext) {
        if !self.can_submit(session) {
            return;
        }

        self.error = None;
        self.is_submitting = true;

        match api.create_comment(self.article_id, &self.new_comment).await {
            Ok(comment) => {
                self.comments.insert(0, comment);
                self.new_comment.clear();
            }
            Err(e) => {
                tracing::error!("Failed to post comment: {e}");
                self.error = Some(SUBMIT_ERROR.to_string());
            }
        }

        self.is_submitting = false;
    }

    /// Heading over the list, pluralized on the live list length.
    pub fn heading(&self) -> String {
        let n = self.comments.len();
        if n == 1 {
            format!("{n} Comment")
        } else {
            format!("{n} Comments")
        }
    }
}

/// First character of the author's name, or "?" when there is none.
/// Used when the author has no avatar image.
pub fn avatar_initial(author: &AuthorResponse) -> String {
    author
        .name
        .as_deref()
        .and_then(|name| name.chars().next())
        .map(|c| c.to_string())
        .unwrap_or_else(|| "?".to_string())
}

/// Author display name, falling back to "Anonymous".
pub fn display_name(author: &AuthorResponse) -> &str {
    author
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or("Anonymous")
}

/// Abbreviated month plus unpadded day, e.g. "Mar 4".
pub fn format_comment_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn author(name: Option<&str>) -> AuthorResponse {
        AuthorResponse {
            id: 1,
            name: name.map(str::to_string),
            email: Some("reader@example.com".to_string()),
            image: None,
        }
    }

    fn comment(id: i64) -> CommentResponse {
        CommentResponse {
            id,
            content: format!("comment {id}"),
            created_at: Utc::now(),
            author: author(Some("Reader")),
        }
    }

    fn session() -> SessionContext {
        use crate::client::providers::Session;
        use crate::models::user::UserResponse;

        SessionContext::authenticated(Session {
            token: "token".to_string(),
            user: UserResponse {
                id: 1,
                name: Some("Reader".to_string()),
                email: "reader@example.com".to_string(),
                image: None,
                created_at: Utc::now(),
            },
        })
    }

    #[test]
    fn test_heading_pluralization() {
        let mut section = CommentSection::new(1);
        assert_eq!(section.heading(), "0 Comments");

        section.comments.push(comment(1));
        assert_eq!(section.heading(), "1 Comment");

        section.comments.push(comment(2));
        assert_eq!(section.heading(), "2 Comments");
    }

    #[test]
    fn test_composer_requires_session() {
        let section = CommentSection::new(1);
        assert!(!section.composer_visible(&SessionContext::anonymous()));
        assert!(section.composer_visible(&session()));
    }

    #[test]
    fn test_submit_guards() {
        let mut section = CommentSection::new(1);
        let session = session();

        // Blank and whitespace-only input stays disabled.
        assert!(!section.can_submit(&session));
        section.new_comment = "   ".to_string();
        assert!(!section.can_submit(&session));

        section.new_comment = "A real comment".to_string();
        assert!(section.can_submit(&session));

        // No concurrent submissions.
        section.is_submitting = true;
        assert!(!section.can_submit(&session));
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut section = CommentSection::new(1);

        let stale = section.begin_load();
        section.set_article(2);
        let fresh = section.begin_load();

        section.finish_load(fresh, Ok(vec![comment(20)]));
        // The slow response for article 1 lands afterwards and is dropped.
        section.finish_load(stale, Ok(vec![comment(10)]));

        assert_eq!(section.comments.len(), 1);
        assert_eq!(section.comments[0].id, 20);
    }

    #[test]
    fn test_failed_load_keeps_existing_list() {
        let mut section = CommentSection::new(1);
        section.comments.push(comment(1));

        let ticket = section.begin_load();
        let error = ClientError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        section.finish_load(ticket, Err(error));

        assert_eq!(section.comments.len(), 1);
        assert!(section.error.is_none());
    }

    #[tokio::test]
    async fn test_submit_while_submitting_is_a_no_op() {
        // Dead port; the guard must return before any request is made.
        let api = ApiClient::new("http://127.0.0.1:1");
        let session = session();

        let mut section = CommentSection::new(1);
        section.new_comment = "Queued comment".to_string();
        section.is_submitting = true;

        section.submit(&api, &session).await;

        assert!(section.is_submitting);
        assert_eq!(section.new_comment, "Queued comment");
        assert!(section.comments.is_empty());
        assert!(section.error.is_none());
    }

    #[tokio::test]
    async fn test_submit_without_session_is_a_no_op() {
        let api = ApiClient::new("http://127.0.0.1:1");

        let mut section = CommentSection::new(1);
        section.new_comment = "Hello".to_string();

        section.submit(&api, &SessionContext::anonymous()).await;

        assert!(!section.is_submitting);
        assert_eq!(section.new_comment, "Hello");
        assert!(section.comments.is_empty());
    }

    #[test]
    fn test_avatar_initial_fallbacks() {
        assert_eq!(avatar_initial(&author(Some("Reader"))), "R");
        assert_eq!(avatar_initial(&author(Some(""))), "?");
        assert_eq!(avatar_initial(&author(None)), "?");
    }

    #[test]
    fn test_display_name_fallbacks() {
        assert_eq!(display_name(&author(Some("Reader"))), "Reader");
        assert_eq!(display_name(&author(Some(""))), "Anonymous");
        assert_eq!(display_name(&author(None)), "Anonymous");
    }

    #[test]
    fn test_date_renders_short_month_and_day() {
        let date = Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).single();
        assert_eq!(format_comment_date(&date.expect("valid date")), "Mar 4");
    }
}
