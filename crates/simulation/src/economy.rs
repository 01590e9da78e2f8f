use bevy::prelude::*;

use crate::drive_params::DriveParams;

/// The player's money in euros. Nothing credits or debits it yet: finished
/// jobs are not paid out.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wallet {
    pub money: i64,
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new(&DriveParams::default())
    }
}

impl Wallet {
    pub fn new(params: &DriveParams) -> Self {
        Self {
            money: params.starting_money,
        }
    }

    /// Money with thousands separators, e.g. `5 000 €`.
    pub fn display(&self) -> String {
        let digits = self.money.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(' ');
            }
            grouped.push(ch);
        }
        let sign = if self.money < 0 { "-" } else { "" };
        format!("{sign}{grouped} €")
    }
}

pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        let wallet = app
            .world()
            .get_resource::<DriveParams>()
            .map(Wallet::new)
            .unwrap_or_default();
        app.insert_resource(wallet);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_starts_with_5000() {
        assert_eq!(Wallet::default().money, 5000);
    }

    #[test]
    fn test_wallet_follows_params() {
        let params = DriveParams {
            starting_money: 1234,
            ..Default::default()
        };
        assert_eq!(Wallet::new(&params).money, 1234);
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Wallet { money: 5000 }.display(), "5 000 €");
        assert_eq!(Wallet { money: 999 }.display(), "999 €");
        assert_eq!(Wallet { money: 1_234_567 }.display(), "1 234 567 €");
        assert_eq!(Wallet { money: -2500 }.display(), "-2 500 €");
        assert_eq!(Wallet { money: 0 }.display(), "0 €");
    }
}
