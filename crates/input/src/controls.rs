//! Control keys: which typed key moves the player in which direction.

use arrayvec::ArrayVec;

use crate::types::Direction;

/// Keys a player may bind: digits, lowercase letters and the unshifted symbols.
pub const USABLE_KEYS: &str = "0123456789abcdefghijklmnopqrstuvwxyz-=[];',./+*";

/// Reasons a custom control scheme is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ControlError {
    #[error("{0:?} cannot be used as a control key")]
    Unusable(char),
    #[error("{0:?} is bound to more than one direction")]
    Duplicate(char),
}

/// One key per direction, stored in [`Direction::ALL`] order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlScheme {
    keys: [char; 8],
}

impl ControlScheme {
    /// The default number-pad layout (1-4, 6-9)
    pub fn numpad() -> Self {
        Self {
            keys: Direction::ALL.map(|d| d.numpad_key()),
        }
    }

    /// Bind `keys[i]` to `Direction::ALL[i]`
    pub fn custom(keys: [char; 8]) -> Result<Self, ControlError> {
        for (i, &key) in keys.iter().enumerate() {
            if !USABLE_KEYS.contains(key) {
                return Err(ControlError::Unusable(key));
            }
            if keys[..i].contains(&key) {
                return Err(ControlError::Duplicate(key));
            }
        }
        Ok(Self { keys })
    }

    pub fn key_for(&self, direction: Direction) -> char {
        let index = Direction::ALL
            .iter()
            .position(|&d| d == direction)
            .unwrap_or(0);
        self.keys[index]
    }

    /// Map a line of player input to a direction
    ///
    /// The input must be exactly one bound key (surrounding whitespace is
    /// ignored).
    pub fn direction_for(&self, input: &str) -> Option<Direction> {
        let mut chars = input.trim().chars();
        let key = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        self.keys
            .iter()
            .position(|&k| k == key)
            .map(|i| Direction::ALL[i])
    }

    pub fn is_numpad(&self) -> bool {
        *self == Self::numpad()
    }

    /// Every (direction, key) binding in numpad order
    pub fn bindings(&self) -> impl Iterator<Item = (Direction, char)> + '_ {
        Direction::ALL.iter().copied().zip(self.keys.iter().copied())
    }
}

impl Default for ControlScheme {
    fn default() -> Self {
        Self::numpad()
    }
}

/// Keys still free while a player is choosing new controls
///
/// Each accepted key is removed, so no two directions share a key.
#[derive(Debug, Clone)]
pub struct KeyPool {
    remaining: ArrayVec<char, 64>,
}

impl KeyPool {
    pub fn new() -> Self {
        Self {
            remaining: USABLE_KEYS.chars().collect(),
        }
    }

    /// Claim the key typed in `input`, if it is a single unclaimed usable key
    pub fn take(&mut self, input: &str) -> Option<char> {
        let mut chars = input.trim().chars();
        let key = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let index = self.remaining.iter().position(|&k| k == key)?;
        Some(self.remaining.remove(index))
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}

impl Default for KeyPool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numpad_keys() {
        let controls = ControlScheme::numpad();
        assert_eq!(controls.direction_for("8"), Some(Direction::North));
        assert_eq!(controls.direction_for("2"), Some(Direction::South));
        assert_eq!(controls.direction_for(" 9 \n"), Some(Direction::NorthEast));
        assert_eq!(controls.direction_for("1"), Some(Direction::SouthWest));
        assert_eq!(controls.direction_for("5"), None);
        assert_eq!(controls.direction_for("88"), None);
        assert_eq!(controls.direction_for(""), None);
        assert!(controls.is_numpad());
    }

    #[test]
    fn test_custom_keys() {
        let controls = ControlScheme::custom(['z', 'x', 'c', 'a', 'd', 'q', 'w', 'e']).unwrap();
        assert_eq!(controls.direction_for("w"), Some(Direction::North));
        assert_eq!(controls.direction_for("8"), None);
        assert_eq!(controls.key_for(Direction::SouthEast), 'c');
        assert!(!controls.is_numpad());
    }

    #[test]
    fn test_custom_keys_rejected() {
        assert_eq!(
            ControlScheme::custom(['z', 'x', 'c', 'a', 'd', 'q', 'w', 'w']),
            Err(ControlError::Duplicate('w'))
        );
        assert_eq!(
            ControlScheme::custom(['Z', 'x', 'c', 'a', 'd', 'q', 'w', 'e']),
            Err(ControlError::Unusable('Z'))
        );
    }

    #[test]
    fn test_key_pool_removes_claimed_keys() {
        let mut pool = KeyPool::new();
        let total = pool.len();
        assert_eq!(pool.take("k"), Some('k'));
        assert_eq!(pool.take("k"), None);
        assert_eq!(pool.take("K"), None);
        assert_eq!(pool.take("ab"), None);
        assert_eq!(pool.len(), total - 1);
    }
}
