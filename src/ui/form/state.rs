use std::time::Instant;

use crate::catalog::ProductInput;
use crate::ui::mvi::UiState;

/// Form fields in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Name,
    Price,
    Category,
    Stock,
    Description,
    ImageUrl,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Price,
        Field::Category,
        Field::Stock,
        Field::Description,
        Field::ImageUrl,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name *",
            Field::Price => "Price *",
            Field::Category => "Category *",
            Field::Stock => "Stock",
            Field::Description => "Description *",
            Field::ImageUrl => "Image URL (optional)",
        }
    }

    pub fn next(self) -> Field {
        let idx = self.index();
        Field::ALL[(idx + 1) % Field::ALL.len()]
    }

    pub fn prev(self) -> Field {
        let idx = self.index();
        Field::ALL[(idx + Field::ALL.len() - 1) % Field::ALL.len()]
    }

    fn index(self) -> usize {
        Field::ALL
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }

    /// Whether a typed character belongs in this field.
    pub fn accepts(self, ch: char) -> bool {
        match self {
            Field::Category => false,
            Field::Price => ch.is_ascii_digit() || ch == '.' || ch == '-',
            Field::Stock => ch.is_ascii_digit() || ch == '-',
            Field::Name | Field::Description | Field::ImageUrl => !ch.is_control(),
        }
    }
}

/// Message shown under the form.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// Product was added; cleared by a tick at or after `expires_at`.
    /// `None` keeps it until the next submit.
    Success {
        message: String,
        expires_at: Option<Instant>,
    },
    /// Submission was rejected; stays until the next edit or submit.
    Invalid { message: String },
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success { message, .. } | Notice::Invalid { message } => message,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub input: ProductInput,
    pub focused: Field,
    pub notice: Option<Notice>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            input: ProductInput {
                stock: "0".to_string(),
                ..ProductInput::default()
            },
            focused: Field::Name,
            notice: None,
        }
    }
}

impl UiState for FormState {}

impl FormState {
    /// Text shown for a field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.input.name,
            Field::Price => &self.input.price,
            Field::Category => self
                .input
                .category
                .as_ref()
                .map(|category| category.as_str())
                .unwrap_or(""),
            Field::Stock => &self.input.stock,
            Field::Description => &self.input.description,
            Field::ImageUrl => &self.input.image_url,
        }
    }

    pub(crate) fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.input.name),
            Field::Price => Some(&mut self.input.price),
            Field::Category => None,
            Field::Stock => Some(&mut self.input.stock),
            Field::Description => Some(&mut self.input.description),
            Field::ImageUrl => Some(&mut self.input.image_url),
        }
    }

    pub fn success_message(&self) -> Option<&str> {
        match &self.notice {
            Some(Notice::Success { message, .. }) => Some(message),
            _ => None,
        }
    }

    pub fn validation_message(&self) -> Option<&str> {
        match &self.notice {
            Some(Notice::Invalid { message }) => Some(message),
            _ => None,
        }
    }
}
