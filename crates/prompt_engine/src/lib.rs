//! Local prompt-template engine for the Prompt Studio app.
//!
//! The engine maps a free-text prompt and a category to a fixed textual
//! template with category-specific boilerplate. It is pure and synchronous;
//! the remote optimize endpoint in `platform_host` is a drop-in replacement
//! for richer output, and the UI treats the two as interchangeable.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed prompt categories understood by the template engine and the remote
/// optimize endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// General text generation.
    Text,
    /// Still image generation.
    Image,
    /// Video generation.
    Video,
    /// Source code generation.
    Code,
    /// Music generation.
    Music,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Text,
        Category::Image,
        Category::Video,
        Category::Code,
        Category::Music,
    ];

    /// Stable lowercase token used on the wire and in DOM hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Video => "video",
            Self::Code => "code",
            Self::Music => "music",
        }
    }

    /// Human-readable label for selectors.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Image => "Image",
            Self::Video => "Video",
            Self::Code => "Code",
            Self::Music => "Music",
        }
    }

    fn boilerplate(self) -> &'static str {
        match self {
            Self::Text => {
                "You are an expert writing assistant. Rewrite the request below into a \
                 clear, specific prompt. State the audience, tone, format, and length \
                 expectations explicitly, and keep the author's intent intact."
            }
            Self::Image => {
                "You are an expert image-prompt engineer. Expand the request below into a \
                 detailed visual prompt: subject, composition, lighting, color palette, \
                 camera/lens hints, and overall style. Avoid negations the model cannot honor."
            }
            Self::Video => {
                "You are an expert video-prompt engineer. Turn the request below into a \
                 shot-by-shot prompt: scene description, camera movement, pacing, duration \
                 hints, and transitions. Keep each shot self-contained."
            }
            Self::Code => {
                "You are an expert software engineer. Restate the request below as a precise \
                 implementation brief: language, inputs and outputs, constraints, edge cases, \
                 and what done looks like. Prefer small, testable requirements."
            }
            Self::Music => {
                "You are an expert music-prompt engineer. Expand the request below into a \
                 production-ready prompt: genre, mood, tempo, instrumentation, structure, \
                 and reference textures. Note anything that must not appear."
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Category {
    type Err = RenderError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "code" => Ok(Self::Code),
            "music" => Ok(Self::Music),
            _ => Err(RenderError::UnknownCategory(raw.to_string())),
        }
    }
}

/// Errors produced by [`render`] and [`Category::from_str`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The prompt was empty or whitespace-only. Callers are expected to
    /// disable the action before invocation; this is the backstop.
    #[error("prompt must not be empty")]
    EmptyPrompt,
    /// The category token did not match any known category.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

/// Renders the fixed template for `category` around `prompt`.
///
/// Advanced fields, when present, are appended as labeled constraint lines in
/// sorted key order so output is deterministic regardless of insertion order.
///
/// # Errors
///
/// Returns [`RenderError::EmptyPrompt`] when `prompt` is whitespace-only.
pub fn render(
    prompt: &str,
    category: Category,
    fields: Option<&BTreeMap<String, String>>,
) -> Result<String, RenderError> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(RenderError::EmptyPrompt);
    }

    let mut out = String::new();
    out.push_str(category.boilerplate());
    out.push_str("\n\nRequest:\n");
    out.push_str(prompt);

    if let Some(fields) = fields {
        let mut wrote_header = false;
        for (key, value) in fields {
            if key.trim().is_empty() || value.trim().is_empty() {
                continue;
            }
            if !wrote_header {
                out.push_str("\n\nConstraints:");
                wrote_header = true;
            }
            out.push_str("\n- ");
            out.push_str(key.trim());
            out.push_str(": ");
            out.push_str(value.trim());
        }
    }

    out.push_str("\n\nReturn only the improved prompt, with no commentary.");
    Ok(out)
}
