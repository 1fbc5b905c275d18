use std::collections::HashMap;

use crate::common::error::SplitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantKind {
    /// Seeded at startup; cannot be removed.
    Fixed,
    /// Added during the session; dropped by `clear_temporary`.
    Temporary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    initial: char,
    kind: ParticipantKind,
}

impl Participant {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lower-cased first character, the letter that selects this participant in a token.
    pub fn initial(&self) -> char {
        self.initial
    }

    pub fn kind(&self) -> ParticipantKind {
        self.kind
    }

    pub fn is_temporary(&self) -> bool {
        self.kind == ParticipantKind::Temporary
    }
}

/// Lower-cases a single character the way token scanning does.
pub fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// The shorthand letter for `name`, if the name starts with a letter.
pub fn initial_of(name: &str) -> Option<char> {
    name.chars()
        .next()
        .filter(|c| c.is_alphabetic())
        .map(fold_char)
}

/// The ordered set of participants in a session.
///
/// Names are unique (case-sensitive) and so are initials, which keeps every
/// letter in a token bound to exactly one participant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    members: Vec<Participant>,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Builds a roster of fixed participants.
    pub fn with_fixed<I, S>(names: I) -> Result<Self, SplitError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Roster::new();
        for name in names {
            roster.add(name.as_ref(), ParticipantKind::Fixed)?;
        }
        Ok(roster)
    }

    /// Adds a participant and returns the stored name.
    ///
    /// Surrounding whitespace is trimmed first, so `"Adhi "` is the same name as
    /// `"Adhi"`. After trimming, names are compared exactly (case-sensitive).
    pub fn add(&mut self, name: &str, kind: ParticipantKind) -> Result<&str, SplitError> {
        let name = name.trim();
        let initial = initial_of(name).ok_or_else(|| SplitError::InvalidName(name.to_string()))?;

        if self.contains(name) {
            return Err(SplitError::DuplicateName(name.to_string()));
        }
        if let Some(existing) = self.by_initial(initial) {
            return Err(SplitError::DuplicateInitial {
                name: name.to_string(),
                initial,
                existing: existing.name.clone(),
            });
        }

        self.members.push(Participant {
            name: name.to_string(),
            initial,
            kind,
        });
        Ok(&self.members[self.members.len() - 1].name)
    }

    /// Removes one temporary participant.
    pub fn remove_temporary(&mut self, name: &str) -> Result<Participant, SplitError> {
        let pos = self
            .members
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| SplitError::UnknownParticipant(name.to_string()))?;
        if !self.members[pos].is_temporary() {
            return Err(SplitError::FixedParticipant(name.to_string()));
        }
        Ok(self.members.remove(pos))
    }

    /// Removes every temporary participant, returning their names.
    pub fn clear_temporary(&mut self) -> Vec<String> {
        let (temporary, fixed): (Vec<_>, Vec<_>) =
            self.members.drain(..).partition(Participant::is_temporary);
        self.members = fixed;
        temporary.into_iter().map(|p| p.name).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|p| p.name == name)
    }

    pub fn by_initial(&self, initial: char) -> Option<&Participant> {
        self.members.iter().find(|p| p.initial == initial)
    }

    /// Initial letter to participant name. On a collision the later member wins,
    /// though `add` never lets one happen.
    pub fn initials(&self) -> HashMap<char, &str> {
        self.members
            .iter()
            .map(|p| (p.initial, p.name.as_str()))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.members.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
