use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Configuration from desk.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeskConfig {
    #[serde(default)]
    pub desk: DeskInfo,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub settings: SettingsConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeskInfo {
    #[serde(default = "default_name")]
    pub name: String,
}

impl Default for DeskInfo {
    fn default() -> Self {
        DeskInfo {
            name: default_name(),
        }
    }
}

fn default_name() -> String {
    "Support Desk".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON seed file, relative to the desk/ directory. Absent means the
    /// builtin sample inbox.
    #[serde(default)]
    pub file: Option<String>,
}

/// Values shown on the Settings tab. They are display-only and never feed the
/// response templater.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsConfig {
    #[serde(default)]
    pub provider: EmailProvider,
    #[serde(default)]
    pub model: AiModel,
    #[serde(default)]
    pub tone: ResponseTone,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    #[default]
    Gmail,
    Outlook,
    Imap,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiModel {
    #[default]
    Gpt4,
    Gpt3,
    Bert,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseTone {
    #[default]
    Professional,
    Friendly,
    Formal,
}

impl EmailProvider {
    pub fn label(self) -> &'static str {
        match self {
            EmailProvider::Gmail => "Gmail",
            EmailProvider::Outlook => "Outlook",
            EmailProvider::Imap => "IMAP",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            EmailProvider::Gmail => "gmail",
            EmailProvider::Outlook => "outlook",
            EmailProvider::Imap => "imap",
        }
    }

    pub fn next(self) -> Self {
        match self {
            EmailProvider::Gmail => EmailProvider::Outlook,
            EmailProvider::Outlook => EmailProvider::Imap,
            EmailProvider::Imap => EmailProvider::Gmail,
        }
    }
}

impl AiModel {
    pub fn label(self) -> &'static str {
        match self {
            AiModel::Gpt4 => "GPT-4",
            AiModel::Gpt3 => "GPT-3.5",
            AiModel::Bert => "BERT",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            AiModel::Gpt4 => "gpt4",
            AiModel::Gpt3 => "gpt3",
            AiModel::Bert => "bert",
        }
    }

    pub fn next(self) -> Self {
        match self {
            AiModel::Gpt4 => AiModel::Gpt3,
            AiModel::Gpt3 => AiModel::Bert,
            AiModel::Bert => AiModel::Gpt4,
        }
    }
}

impl ResponseTone {
    pub fn label(self) -> &'static str {
        match self {
            ResponseTone::Professional => "Professional",
            ResponseTone::Friendly => "Friendly",
            ResponseTone::Formal => "Formal",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            ResponseTone::Professional => "professional",
            ResponseTone::Friendly => "friendly",
            ResponseTone::Formal => "formal",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ResponseTone::Professional => ResponseTone::Friendly,
            ResponseTone::Friendly => ResponseTone::Formal,
            ResponseTone::Formal => ResponseTone::Professional,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    #[serde(default)]
    pub show_key_hints: bool,
    /// Theme overrides, e.g. `background = "#000000"`
    #[serde(default)]
    pub colors: IndexMap<String, String>,
}
