//! XML documents for the write endpoints.
//!
//! Each document is built from a fixed template. Values are inserted
//! without escaping: text containing `<`, `>` or `&` must be escaped by the
//! caller. Free text (subjects, bodies, comments, titles, descriptions and
//! names) is trimmed; ids, email addresses and URLs are inserted as given.

use crate::api::ValidationError;

/// Prolog of every document.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Builds a mailbox item sending a message to members by id.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyRecipients`] if `recipients` is empty.
///
/// # Example
///
/// ```rust
/// use linkedin_api::api::documents::message_xml;
///
/// let xml = message_xml(&["abc123"], " Hi ", "Long time no see").unwrap();
/// assert_eq!(
///     xml,
///     concat!(
///         r#"<?xml version="1.0" encoding="UTF-8"?><mailbox-item><recipients>"#,
///         r#"<recipient><person path="/people/abc123"/></recipient></recipients>"#,
///         "<subject>Hi</subject><body>Long time no see</body></mailbox-item>",
///     )
/// );
/// ```
pub fn message_xml<S: AsRef<str>>(
    recipients: &[S],
    subject: &str,
    body: &str,
) -> Result<String, ValidationError> {
    if recipients.is_empty() {
        return Err(ValidationError::EmptyRecipients);
    }

    let recipients: String = recipients
        .iter()
        .map(|id| format!(r#"<recipient><person path="/people/{}"/></recipient>"#, id.as_ref()))
        .collect();

    Ok(format!(
        "{XML_DECLARATION}<mailbox-item><recipients>{recipients}</recipients>\
         <subject>{}</subject><body>{}</body></mailbox-item>",
        subject.trim(),
        body.trim()
    ))
}

/// Builds the body of a status update.
#[must_use]
pub fn status_xml(status: &str) -> String {
    format!(
        "{XML_DECLARATION}<current-status>{}</current-status>",
        status.trim()
    )
}

/// Builds a comment on a network update.
#[must_use]
pub fn comment_xml(comment: &str) -> String {
    format!(
        "{XML_DECLARATION}<update-comment><comment>{}</comment></update-comment>",
        comment.trim()
    )
}

/// Who an invitation is addressed to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvitationRecipient {
    /// Someone outside the member's network, reached by email.
    Email {
        /// The recipient's email address.
        address: String,
        /// The recipient's first name.
        first_name: String,
        /// The recipient's last name.
        last_name: String,
    },
    /// A LinkedIn member, reached by id.
    ///
    /// LinkedIn returns an `x-li-auth-token` value such as `NAME_SEARCH:a1b2`
    /// with the member in search and profile responses. It is split at the
    /// colon into `auth_name` and `auth_value`.
    Member {
        /// The member id.
        id: String,
        /// Part of the `x-li-auth-token` before the colon.
        auth_name: String,
        /// Part of the `x-li-auth-token` after the colon.
        auth_value: String,
    },
}

impl InvitationRecipient {
    /// Creates an email recipient.
    #[must_use]
    pub fn email(
        address: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self::Email {
            address: address.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Creates a member recipient.
    #[must_use]
    pub fn member(
        id: impl Into<String>,
        auth_name: impl Into<String>,
        auth_value: impl Into<String>,
    ) -> Self {
        Self::Member {
            id: id.into(),
            auth_name: auth_name.into(),
            auth_value: auth_value.into(),
        }
    }
}

/// An invitation to connect.
///
/// # Example
///
/// ```rust
/// use linkedin_api::{Invitation, InvitationRecipient};
///
/// let invitation = Invitation::new(
///     InvitationRecipient::email("jane@example.com", "Jane", "Doe"),
///     "Invitation to connect",
///     "Please join my network.",
/// );
/// assert!(invitation.to_xml().contains(r#"<person path="/people/email=jane@example.com">"#));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invitation {
    /// Who the invitation goes to.
    pub recipient: InvitationRecipient,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
}

impl Invitation {
    /// Creates an invitation.
    #[must_use]
    pub fn new(
        recipient: InvitationRecipient,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            recipient,
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Renders the mailbox item.
    #[must_use]
    pub fn to_xml(&self) -> String {
        let (recipient, authorization) = match &self.recipient {
            InvitationRecipient::Email {
                address,
                first_name,
                last_name,
            } => (
                format!(
                    r#"<recipient><person path="/people/email={address}"><first>{}</first><last>{}</last></person></recipient>"#,
                    first_name.trim(),
                    last_name.trim()
                ),
                String::new(),
            ),
            InvitationRecipient::Member {
                id,
                auth_name,
                auth_value,
            } => (
                format!(r#"<recipient><person path="/people/id={id}"></person></recipient>"#),
                format!(
                    "<authorization><name>{auth_name}</name><value>{auth_value}</value></authorization>"
                ),
            ),
        };

        format!(
            "{XML_DECLARATION}<mailbox-item><recipients>{recipient}</recipients>\
             <subject>{}</subject><body>{}</body>\
             <item-content><invitation-request><connect_type>friend</connect_type>\
             {authorization}</invitation-request></item-content></mailbox-item>",
            self.subject.trim(),
            self.body.trim()
        )
    }
}

/// A link attached to a share, with an optional preview image.
///
/// An image can only be attached together with a link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmittedLink {
    /// The shared URL.
    pub url: String,
    /// Image shown with the link.
    pub image_url: Option<String>,
}

impl SubmittedLink {
    /// Creates a link without an image.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            image_url: None,
        }
    }

    /// Attaches a preview image.
    #[must_use]
    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

/// A share posted to the member's network, visible to anyone.
///
/// LinkedIn caps the comment at 700 characters, the title at 200 and the
/// description at 256. The limits are enforced by LinkedIn, not here.
///
/// # Example
///
/// ```rust
/// use linkedin_api::{Share, SubmittedLink};
///
/// let share = Share::new("Worth a read", "Rust 1.0", "Stability as a deliverable")
///     .with_link(SubmittedLink::new("https://blog.rust-lang.org/").with_image("https://www.rust-lang.org/logo.png"));
///
/// assert!(share.to_xml().ends_with(
///     "<submitted-image-url>https://www.rust-lang.org/logo.png</submitted-image-url></content><visibility><code>anyone</code></visibility></share>"
/// ));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Share {
    /// The member's own words.
    pub comment: String,
    /// Title of the shared content.
    pub title: String,
    /// Description of the shared content.
    pub description: String,
    /// Optional link, with an optional image.
    pub link: Option<SubmittedLink>,
}

impl Share {
    /// Creates a share without a link.
    #[must_use]
    pub fn new(
        comment: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            comment: comment.into(),
            title: title.into(),
            description: description.into(),
            link: None,
        }
    }

    /// Attaches a link.
    #[must_use]
    pub fn with_link(mut self, link: SubmittedLink) -> Self {
        self.link = Some(link);
        self
    }

    /// Renders the share document.
    #[must_use]
    pub fn to_xml(&self) -> String {
        let mut content = format!(
            "<title>{}</title><description>{}</description>",
            self.title.trim(),
            self.description.trim()
        );
        if let Some(link) = &self.link {
            content.push_str(&format!("<submitted-url>{}</submitted-url>", link.url));
            if let Some(image_url) = &link.image_url {
                content.push_str(&format!(
                    "<submitted-image-url>{image_url}</submitted-image-url>"
                ));
            }
        }

        format!(
            "{XML_DECLARATION}<share><comment>{}</comment><content>{content}</content>\
             <visibility><code>anyone</code></visibility></share>",
            self.comment.trim()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_with_several_recipients() {
        let xml = message_xml(&["a1", "b2"], "Subject", "Body").unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><mailbox-item><recipients>\
             <recipient><person path=\"/people/a1\"/></recipient>\
             <recipient><person path=\"/people/b2\"/></recipient>\
             </recipients><subject>Subject</subject><body>Body</body></mailbox-item>"
        );
    }

    #[test]
    fn test_message_without_recipients_is_rejected() {
        let recipients: [&str; 0] = [];
        assert_eq!(
            message_xml(&recipients, "s", "b"),
            Err(ValidationError::EmptyRecipients)
        );
    }

    #[test]
    fn test_values_are_not_escaped() {
        let xml = message_xml(&["id"], "Tom & Jerry", "<b>hi</b>").unwrap();
        assert!(xml.contains("<subject>Tom & Jerry</subject><body><b>hi</b></body>"));
    }

    #[test]
    fn test_status_is_trimmed() {
        assert_eq!(
            status_xml("  Writing Rust \n"),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><current-status>Writing Rust</current-status>"
        );
    }

    #[test]
    fn test_comment_document() {
        assert_eq!(
            comment_xml(" Nice! "),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><update-comment><comment>Nice!</comment></update-comment>"
        );
    }

    #[test]
    fn test_email_invitation() {
        let invitation = Invitation::new(
            InvitationRecipient::email("jane@example.com", " Jane ", "Doe"),
            " Let's connect ",
            "Hello Jane",
        );
        assert_eq!(
            invitation.to_xml(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><mailbox-item><recipients>\
             <recipient><person path=\"/people/email=jane@example.com\">\
             <first>Jane</first><last>Doe</last></person></recipient></recipients>\
             <subject>Let's connect</subject><body>Hello Jane</body>\
             <item-content><invitation-request><connect_type>friend</connect_type>\
             </invitation-request></item-content></mailbox-item>"
        );
    }

    #[test]
    fn test_member_invitation_carries_authorization() {
        let invitation = Invitation::new(
            InvitationRecipient::member("UBnvBG4fD8", "NAME_SEARCH", "aXBx"),
            "Join me",
            "Hi",
        );
        assert_eq!(
            invitation.to_xml(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><mailbox-item><recipients>\
             <recipient><person path=\"/people/id=UBnvBG4fD8\"></person></recipient></recipients>\
             <subject>Join me</subject><body>Hi</body>\
             <item-content><invitation-request><connect_type>friend</connect_type>\
             <authorization><name>NAME_SEARCH</name><value>aXBx</value></authorization>\
             </invitation-request></item-content></mailbox-item>"
        );
    }

    #[test]
    fn test_share_without_link() {
        let share = Share::new(" Look ", " Title ", " Description ");
        assert_eq!(
            share.to_xml(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><share><comment>Look</comment>\
             <content><title>Title</title><description>Description</description></content>\
             <visibility><code>anyone</code></visibility></share>"
        );
    }

    #[test]
    fn test_share_with_link_and_no_image() {
        let share = Share::new("c", "t", "d").with_link(SubmittedLink::new("https://example.com/a"));
        let xml = share.to_xml();
        assert!(xml.contains(
            "<description>d</description><submitted-url>https://example.com/a</submitted-url></content>"
        ));
        assert!(!xml.contains("submitted-image-url"));
    }
}
