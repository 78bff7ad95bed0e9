use serde::{Deserialize, Serialize};
use std::fmt;

/// Command families this engine understands.
///
/// Each family is identified by its leading tokens, matched literally and
/// case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    DeviceConfig,
    AddServer,
    AddServiceGroup,
    AddLbVserver,
    BindServiceGroup,
    BindSslVserver,
    BindLbVserver,
}

impl CommandKind {
    pub const ALL: [CommandKind; 7] = [
        CommandKind::DeviceConfig,
        CommandKind::AddServer,
        CommandKind::AddServiceGroup,
        CommandKind::AddLbVserver,
        CommandKind::BindServiceGroup,
        CommandKind::BindSslVserver,
        CommandKind::BindLbVserver,
    ];

    pub const fn prefix(self) -> &'static [&'static str] {
        match self {
            CommandKind::DeviceConfig => &["set", "ns", "config"],
            CommandKind::AddServer => &["add", "server"],
            CommandKind::AddServiceGroup => &["add", "serviceGroup"],
            CommandKind::AddLbVserver => &["add", "lb", "vserver"],
            CommandKind::BindServiceGroup => &["bind", "serviceGroup"],
            CommandKind::BindSslVserver => &["bind", "ssl", "vserver"],
            CommandKind::BindLbVserver => &["bind", "lb", "vserver"],
        }
    }

    /// vserver → service group bindings wait for phase 2: the group's member
    /// list is only final once every `bind serviceGroup` line has been seen.
    pub const fn is_deferred(self) -> bool {
        matches!(self, CommandKind::BindLbVserver)
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix().join(" "))
    }
}
