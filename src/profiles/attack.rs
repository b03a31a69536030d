//! The attacking weapon profile
//!
//! Fields are private: once built, a profile is known to satisfy every
//! range rule and cannot be changed.

use crate::core::types::{DieFace, MAX_FACE};
use crate::dice::RerollPolicy;
use crate::validation::{FieldError, InputField};

#[derive(Debug, Clone, PartialEq)]
pub struct AttackProfile {
    attacks: f64,
    to_hit: DieFace,
    strength: u32,
    ap: u32,
    damage: f64,
    reroll_hit: RerollPolicy,
    reroll_wound: RerollPolicy,
}

impl AttackProfile {
    /// Build a profile, rejecting the first out-of-range field
    ///
    /// Fields are checked in form order: attacks, damage, strength, to-hit.
    /// AP cannot be out of range once it is a `u32`.
    pub fn new(
        attacks: f64,
        to_hit: DieFace,
        strength: u32,
        ap: u32,
        damage: f64,
        reroll_hit: RerollPolicy,
        reroll_wound: RerollPolicy,
    ) -> Result<Self, FieldError> {
        if !(attacks.is_finite() && attacks >= 0.0) {
            return Err(FieldError::new(InputField::Attacks));
        }
        if !(damage.is_finite() && damage >= 0.0) {
            return Err(FieldError::new(InputField::Damage));
        }
        if strength == 0 {
            return Err(FieldError::new(InputField::Strength));
        }
        if !(1..=MAX_FACE).contains(&to_hit) {
            return Err(FieldError::new(InputField::ToHit));
        }

        Ok(Self {
            attacks,
            to_hit,
            strength,
            ap,
            damage,
            reroll_hit,
            reroll_wound,
        })
    }

    /// Swap the reroll policies, keeping every statistic
    pub fn with_rerolls(mut self, reroll_hit: RerollPolicy, reroll_wound: RerollPolicy) -> Self {
        self.reroll_hit = reroll_hit;
        self.reroll_wound = reroll_wound;
        self
    }

    pub fn attacks(&self) -> f64 {
        self.attacks
    }

    pub fn to_hit(&self) -> DieFace {
        self.to_hit
    }

    pub fn strength(&self) -> u32 {
        self.strength
    }

    pub fn ap(&self) -> u32 {
        self.ap
    }

    pub fn damage(&self) -> f64 {
        self.damage
    }

    pub fn reroll_hit(&self) -> RerollPolicy {
        self.reroll_hit
    }

    pub fn reroll_wound(&self) -> RerollPolicy {
        self.reroll_wound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bolter(strength: u32, to_hit: DieFace) -> Result<AttackProfile, FieldError> {
        AttackProfile::new(2.0, to_hit, strength, 0, 1.0, RerollPolicy::None, RerollPolicy::None)
    }

    #[test]
    fn test_valid_profile() {
        let profile = bolter(4, 3).expect("valid profile");
        assert_eq!(profile.strength(), 4);
        assert_eq!(profile.to_hit(), 3);
        assert_eq!(profile.reroll_hit(), RerollPolicy::None);
    }

    #[test]
    fn test_zero_strength_rejected() {
        assert_eq!(bolter(0, 3).unwrap_err().field, InputField::Strength);
    }

    #[test]
    fn test_to_hit_range() {
        assert_eq!(bolter(4, 0).unwrap_err().field, InputField::ToHit);
        assert_eq!(bolter(4, 7).unwrap_err().field, InputField::ToHit);
        assert!(bolter(4, 1).is_ok());
        assert!(bolter(4, 6).is_ok());
    }

    #[test]
    fn test_negative_and_nan_attacks_rejected() {
        let negative =
            AttackProfile::new(-1.0, 3, 4, 0, 1.0, RerollPolicy::None, RerollPolicy::None);
        assert_eq!(negative.unwrap_err().field, InputField::Attacks);

        let nan = AttackProfile::new(
            f64::NAN,
            3,
            4,
            0,
            1.0,
            RerollPolicy::None,
            RerollPolicy::None,
        );
        assert_eq!(nan.unwrap_err().field, InputField::Attacks);
    }

    #[test]
    fn test_fractional_damage_allowed() {
        // D3 averages to 2, D6 to 3.5
        let profile =
            AttackProfile::new(1.0, 3, 9, 3, 3.5, RerollPolicy::None, RerollPolicy::None);
        assert_eq!(profile.expect("valid profile").damage(), 3.5);
    }

    #[test]
    fn test_with_rerolls() {
        let profile = bolter(4, 3)
            .expect("valid profile")
            .with_rerolls(RerollPolicy::Ones, RerollPolicy::All);
        assert_eq!(profile.reroll_hit(), RerollPolicy::Ones);
        assert_eq!(profile.reroll_wound(), RerollPolicy::All);
        assert_eq!(profile.strength(), 4);
    }
}
