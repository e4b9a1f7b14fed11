//! Plain-text rendering of an [`Outline`], one line per entry.
//!
//! ```text
//! public class Robot extends Bot
//!   field int speed
//!   method void run()
//!     call move
//! function void main()
//! error[E5010] opening brace missing (found `;`) at 41..42
//! ```

use std::fmt;

use cbot_core::lang::keywords;

use super::{Call, ItemKind, Member, MemberKind, Modifiers, Outline, OutlineItem, Param, Signature};

impl fmt::Display for Modifiers {
    /// Each written modifier followed by a space, so it can prefix a declaration directly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.keywords().try_for_each(|id| write!(f, "{} ", keywords::as_str(id)))
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.ty {
            Some(ty) => write!(f, "{ty} {}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ret) = &self.return_type {
            write!(f, "{ret} ")?;
        }
        if let Some(owner) = &self.owner {
            write!(f, "{owner}::")?;
        }
        write!(f, "{}(", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            write!(f, "{item}")?;
        }
        for diagnostic in &self.diagnostics {
            writeln!(
                f,
                "error[{}] {} at {}..{}",
                diagnostic.code, diagnostic, diagnostic.span.start, diagnostic.span.end
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for OutlineItem {
    /// The item line followed by its members and calls, each line newline-terminated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ItemKind::Class { name, extends, members } => {
                write!(f, "{}class {name}", self.modifiers)?;
                if let Some(base) = extends {
                    write!(f, " extends {base}")?;
                }
                writeln!(f)?;
                for member in members {
                    write_member(f, member)?;
                }
            }
            ItemKind::Function { signature, calls } => {
                writeln!(f, "{}function {signature}", self.modifiers)?;
                write_calls(f, calls, 1)?;
            }
        }
        Ok(())
    }
}

fn write_member(f: &mut fmt::Formatter<'_>, member: &Member) -> fmt::Result {
    match &member.kind {
        MemberKind::Field { ty } => writeln!(f, "  {}field {ty} {}", member.modifiers, member.name),
        MemberKind::Method { signature, calls } => {
            writeln!(f, "  {}method {signature}", member.modifiers)?;
            write_calls(f, calls, 2)
        }
    }
}

fn write_calls(f: &mut fmt::Formatter<'_>, calls: &[Call], depth: usize) -> fmt::Result {
    for call in calls {
        let dot = if call.is_method { "." } else { "" };
        writeln!(f, "{:indent$}call {dot}{}", "", call.name, indent = depth * 2)?;
    }
    Ok(())
}
