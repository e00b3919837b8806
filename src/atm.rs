//! Session 2: ATM menu over a single in-memory account.

use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

pub const INITIAL_BALANCE: f64 = 1000.00;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AtmError {
    #[error("Invalid {0} amount. Please enter a positive value.")]
    InvalidAmount(&'static str),
    #[error("Insufficient funds.")]
    InsufficientFunds,
    #[error("Invalid choice. Please select a valid option from the menu.")]
    InvalidChoice,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    balance: f64,
}

impl Default for Account {
    fn default() -> Self {
        Self::new(INITIAL_BALANCE)
    }
}

impl Account {
    pub fn new(balance: f64) -> Self {
        Self { balance }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn deposit(&mut self, amount: f64) -> Result<f64, AtmError> {
        if amount <= 0.0 {
            return Err(AtmError::InvalidAmount("deposit"));
        }
        self.balance += amount;
        Ok(self.balance)
    }

    pub fn withdraw(&mut self, amount: f64) -> Result<f64, AtmError> {
        if amount <= 0.0 {
            return Err(AtmError::InvalidAmount("withdrawal"));
        }
        if amount > self.balance {
            return Err(AtmError::InsufficientFunds);
        }
        self.balance -= amount;
        Ok(self.balance)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CheckBalance,
    Deposit,
    Withdraw,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = AtmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u32>() {
            Ok(1) => Ok(MenuChoice::CheckBalance),
            Ok(2) => Ok(MenuChoice::Deposit),
            Ok(3) => Ok(MenuChoice::Withdraw),
            Ok(4) => Ok(MenuChoice::Exit),
            _ => Err(AtmError::InvalidChoice),
        }
    }
}

fn display_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "ATM Menu:")?;
    writeln!(out, "1. Check Balance")?;
    writeln!(out, "2. Deposit Money")?;
    writeln!(out, "3. Withdraw Money")?;
    writeln!(out, "4. Exit")?;
    write!(out, "Enter your choice (1-4): ")?;
    out.flush()
}

/// Reads one line; `None` at end of input.
fn read_token(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompts for an amount. `Ok(None)` means the session should end;
/// `Ok(Some(None))` means the amount was unreadable.
fn read_amount(
    prompt: &str,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<Option<Option<f64>>> {
    write!(out, "{prompt}")?;
    out.flush()?;
    Ok(read_token(input)?.map(|token| token.parse::<f64>().ok()))
}

/// Runs the menu loop against `account` until the user exits or input runs
/// out.
pub fn run_session(
    account: &mut Account,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    loop {
        display_menu(out)?;
        let Some(token) = read_token(input)? else {
            writeln!(out)?;
            return Ok(());
        };

        if token.parse::<i64>().is_err() {
            writeln!(out, "Invalid input. Please enter a number between 1 and 4.")?;
            continue;
        }

        let choice = match token.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };
        debug!(?choice, "menu selection");

        match choice {
            MenuChoice::CheckBalance => {
                writeln!(out, "Your current balance is: ${:.2}", account.balance())?;
            }
            MenuChoice::Deposit => {
                let Some(amount) = read_amount("Enter amount to deposit: ", input, out)? else {
                    return Ok(());
                };
                let Some(amount) = amount else {
                    writeln!(out, "Invalid input. Please enter a valid amount.")?;
                    continue;
                };
                match account.deposit(amount) {
                    Ok(balance) => writeln!(
                        out,
                        "You deposited ${amount:.2}. Your new balance is: ${balance:.2}"
                    )?,
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            MenuChoice::Withdraw => {
                let Some(amount) = read_amount("Enter amount to withdraw: ", input, out)? else {
                    return Ok(());
                };
                let Some(amount) = amount else {
                    writeln!(out, "Invalid input. Please enter a valid amount.")?;
                    continue;
                };
                match account.withdraw(amount) {
                    Ok(balance) => writeln!(
                        out,
                        "You withdrew ${amount:.2}. Your new balance is: ${balance:.2}"
                    )?,
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            MenuChoice::Exit => {
                writeln!(out, "Thank you for using the ATM. Goodbye!")?;
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (Account, String) {
        let mut account = Account::default();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        run_session(&mut account, &mut input, &mut out).unwrap();
        (account, String::from_utf8(out).unwrap())
    }

    #[test]
    fn deposit_and_withdraw_rules() {
        let mut account = Account::default();
        assert_eq!(account.deposit(50.0), Ok(1050.0));
        assert_eq!(account.deposit(0.0), Err(AtmError::InvalidAmount("deposit")));
        assert_eq!(account.withdraw(2000.0), Err(AtmError::InsufficientFunds));
        assert_eq!(account.withdraw(-1.0), Err(AtmError::InvalidAmount("withdrawal")));
        assert_eq!(account.withdraw(1050.0), Ok(0.0));
    }

    #[test]
    fn menu_choice_parsing() {
        assert_eq!("1".parse(), Ok(MenuChoice::CheckBalance));
        assert_eq!("4".parse(), Ok(MenuChoice::Exit));
        assert_eq!("9".parse::<MenuChoice>(), Err(AtmError::InvalidChoice));
    }

    #[test]
    fn scripted_session() {
        let (account, output) = run("1\n2\n250\n3\n100\n4\n");
        assert_eq!(account.balance(), 1150.0);
        assert!(output.contains("Your current balance is: $1000.00"));
        assert!(output.contains("You deposited $250.00. Your new balance is: $1250.00"));
        assert!(output.contains("You withdrew $100.00. Your new balance is: $1150.00"));
        assert!(output.ends_with("Thank you for using the ATM. Goodbye!\n"));
    }

    #[test]
    fn recovers_from_bad_input() {
        let (account, output) = run("abc\n7\n2\nlots\n3\n5000\n4\n");
        assert_eq!(account.balance(), INITIAL_BALANCE);
        assert!(output.contains("Invalid input. Please enter a number between 1 and 4."));
        assert!(output.contains("Invalid choice. Please select a valid option from the menu."));
        assert!(output.contains("Invalid input. Please enter a valid amount."));
        assert!(output.contains("Insufficient funds."));
    }

    #[test]
    fn end_of_input_ends_session() {
        let (account, output) = run("2\n");
        assert_eq!(account.balance(), INITIAL_BALANCE);
        assert!(output.ends_with("Enter amount to deposit: "));
    }
}
