/// Visual style of an announcement (maps to the embed colour)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnouncementStyle {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementFooter {
    pub text: String,
    pub icon_url: Option<String>,
}

/// Platform-neutral announcement; the Discord layer renders it as an embed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub title: String,
    pub description: String,
    pub style: AnnouncementStyle,
    pub fields: Vec<AnnouncementField>,
    pub thumbnail_url: Option<String>,
    pub image_url: Option<String>,
    pub footer: Option<AnnouncementFooter>,
}

impl Announcement {
    pub fn new(
        style: AnnouncementStyle,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            style,
            fields: Vec::new(),
            thumbnail_url: None,
            image_url: None,
            footer: None,
        }
    }

    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.fields.push(AnnouncementField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn footer(mut self, text: impl Into<String>, icon_url: Option<String>) -> Self {
        self.footer = Some(AnnouncementFooter {
            text: text.into(),
            icon_url,
        });
        self
    }

    /// Value of the first field named `name`
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    pub fn is_error(&self) -> bool {
        self.style == AnnouncementStyle::Error
    }
}
