//! Token layouts of the commands this engine consumes.
//!
//! Subject fields (names, addresses, ports) sit at fixed token positions;
//! everything else is read from `-flag value` pairs. The table below is the
//! single description of those positions, including the FTP virtual server
//! whose address and port are shifted by a marker token.

use crate::tokenizer::is_flag;
use adcgraph_core::{CommandKind, ExtractError};

/// What a positional token means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Name,
    Address,
    Port,
    ServiceType,
    Member,
    CertKey,
    Vserver,
    ServiceGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSlot {
    pub role: FieldRole,
    pub index: usize,
    /// Slots only count while no flag token has appeared before or at their
    /// position. A required slot past the first flag makes the line malformed.
    pub required: bool,
}

const fn req(role: FieldRole, index: usize) -> FieldSlot {
    FieldSlot {
        role,
        index,
        required: true,
    }
}

const fn opt(role: FieldRole, index: usize) -> FieldSlot {
    FieldSlot {
        role,
        index,
        required: false,
    }
}

/// Decides whether a line under a known prefix is the variant this engine
/// models. Sibling forms (cipher bindings, policy bindings) share the prefix
/// but carry no topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Always,
    /// The token at `index` must equal `token` when present.
    TokenEquals { index: usize, token: &'static str },
    /// The token at `index` must not be a flag when present.
    NotFlag { index: usize },
}

impl Selector {
    fn accepts(&self, tokens: &[String]) -> bool {
        match *self {
            Selector::Always => true,
            Selector::TokenEquals { index, token } => {
                tokens.get(index).map_or(true, |t| t == token)
            }
            Selector::NotFlag { index } => tokens.get(index).map_or(true, |t| !is_flag(t)),
        }
    }

    /// Position whose token the selector fixes, even when that token is a flag.
    fn pinned_index(&self) -> Option<usize> {
        match *self {
            Selector::TokenEquals { index, .. } => Some(index),
            Selector::Always | Selector::NotFlag { .. } => None,
        }
    }
}

/// Alternative slot set used when `marker` appears anywhere in the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutVariant {
    pub marker: &'static str,
    pub slots: &'static [FieldSlot],
    /// Values the variant fixes instead of reading them from a position.
    pub implied: &'static [(FieldRole, &'static str)],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandLayout {
    pub kind: CommandKind,
    pub selector: Selector,
    pub slots: &'static [FieldSlot],
    pub variant: Option<LayoutVariant>,
}

pub const FTP_MARKER: &str = "[ftp://FTP";
pub const CERTKEY_FLAG: &str = "-certkeyName";

pub static LAYOUTS: [CommandLayout; 7] = [
    CommandLayout {
        kind: CommandKind::DeviceConfig,
        selector: Selector::Always,
        slots: &[],
        variant: None,
    },
    CommandLayout {
        kind: CommandKind::AddServer,
        selector: Selector::Always,
        slots: &[
            req(FieldRole::Name, 2),
            req(FieldRole::Address, 3),
            opt(FieldRole::Port, 4),
        ],
        variant: None,
    },
    CommandLayout {
        kind: CommandKind::AddServiceGroup,
        selector: Selector::Always,
        slots: &[req(FieldRole::Name, 2)],
        variant: None,
    },
    CommandLayout {
        kind: CommandKind::AddLbVserver,
        selector: Selector::Always,
        slots: &[
            req(FieldRole::Name, 3),
            req(FieldRole::ServiceType, 4),
            req(FieldRole::Address, 5),
            req(FieldRole::Port, 6),
        ],
        variant: Some(LayoutVariant {
            marker: FTP_MARKER,
            slots: &[
                req(FieldRole::Name, 3),
                req(FieldRole::Address, 6),
                req(FieldRole::Port, 7),
            ],
            implied: &[(FieldRole::ServiceType, "FTP")],
        }),
    },
    CommandLayout {
        kind: CommandKind::BindServiceGroup,
        selector: Selector::Always,
        slots: &[
            req(FieldRole::ServiceGroup, 2),
            opt(FieldRole::Member, 3),
            opt(FieldRole::Port, 4),
        ],
        variant: None,
    },
    CommandLayout {
        kind: CommandKind::BindSslVserver,
        selector: Selector::TokenEquals {
            index: 4,
            token: CERTKEY_FLAG,
        },
        slots: &[req(FieldRole::Vserver, 3), req(FieldRole::CertKey, 5)],
        variant: None,
    },
    CommandLayout {
        kind: CommandKind::BindLbVserver,
        selector: Selector::NotFlag { index: 4 },
        slots: &[req(FieldRole::Vserver, 3), req(FieldRole::ServiceGroup, 4)],
        variant: None,
    },
];

pub fn layout_for(kind: CommandKind) -> &'static CommandLayout {
    LAYOUTS
        .iter()
        .find(|layout| layout.kind == kind)
        .unwrap_or_else(|| unreachable!("every CommandKind has a layout"))
}

impl CommandLayout {
    pub fn prefix(&self) -> &'static [&'static str] {
        self.kind.prefix()
    }

    /// Literal, case-sensitive match of the leading tokens.
    pub fn matches(&self, tokens: &[String]) -> bool {
        let prefix = self.prefix();
        tokens.len() >= prefix.len() && prefix.iter().zip(tokens).all(|(p, t)| p == t)
    }

    fn active_variant(&self, tokens: &[String]) -> Option<&LayoutVariant> {
        self.variant
            .as_ref()
            .filter(|variant| tokens.iter().any(|t| t == variant.marker))
    }

    pub fn slots_for(&self, tokens: &[String]) -> &'static [FieldSlot] {
        match self.active_variant(tokens) {
            Some(variant) => variant.slots,
            None => self.slots,
        }
    }

    /// Smallest token count that fills every required slot.
    pub fn min_tokens(&self, tokens: &[String]) -> usize {
        self.slots_for(tokens)
            .iter()
            .filter(|slot| slot.required)
            .map(|slot| slot.index + 1)
            .max()
            .unwrap_or(0)
            .max(self.prefix().len())
    }

    /// Binds the line's tokens to this layout.
    ///
    /// Returns `Ok(None)` for sibling forms rejected by the selector and an
    /// error when required positions are missing.
    pub fn fields<'t>(&self, tokens: &'t [String]) -> Result<Option<Fields<'t>>, ExtractError> {
        if !self.selector.accepts(tokens) {
            return Ok(None);
        }

        let expected = self.min_tokens(tokens);
        if tokens.len() < expected {
            return Err(ExtractError::TooFewTokens {
                expected,
                found: tokens.len(),
            });
        }

        let pinned = self.selector.pinned_index();
        let positional_end = tokens
            .iter()
            .enumerate()
            .skip(self.prefix().len())
            .find(|(i, t)| Some(*i) != pinned && is_flag(t))
            .map_or(tokens.len(), |(i, _)| i);

        let slots = self.slots_for(tokens);
        if let Some(slot) = slots
            .iter()
            .find(|slot| slot.required && slot.index >= positional_end)
        {
            return Err(ExtractError::TooFewTokens {
                expected: slot.index + 1,
                found: positional_end,
            });
        }

        Ok(Some(Fields {
            tokens,
            slots,
            implied: self
                .active_variant(tokens)
                .map(|variant| variant.implied)
                .unwrap_or(&[]),
            positional_end,
        }))
    }
}

/// Tokens of one line viewed through its layout.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'t> {
    tokens: &'t [String],
    slots: &'static [FieldSlot],
    implied: &'static [(FieldRole, &'static str)],
    positional_end: usize,
}

impl<'t> Fields<'t> {
    pub fn get(&self, role: FieldRole) -> Option<&'t str> {
        if let Some((_, value)) = self.implied.iter().find(|(r, _)| *r == role) {
            return Some(*value);
        }

        let slot = self.slots.iter().find(|slot| slot.role == role)?;
        if slot.index >= self.positional_end {
            return None;
        }
        self.tokens.get(slot.index).map(String::as_str)
    }

    pub fn require(&self, role: FieldRole) -> Result<&'t str, ExtractError> {
        self.get(role).ok_or(ExtractError::TooFewTokens {
            expected: self
                .slots
                .iter()
                .find(|slot| slot.role == role)
                .map_or(self.tokens.len() + 1, |slot| slot.index + 1),
            found: self.tokens.len(),
        })
    }

    pub fn option(&self, flag: &str) -> Option<&'t str> {
        option_value(self.tokens, flag)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Value following `flag`, or `None` when the flag is absent or dangling.
pub fn option_value<'t>(tokens: &'t [String], flag: &str) -> Option<&'t str> {
    let idx = tokens.iter().position(|t| t == flag)?;
    tokens
        .get(idx + 1)
        .filter(|value| !is_flag(value))
        .map(String::as_str)
}
