use super::cart::Cart;

/// Minimum length of a trimmed delivery address, in characters.
pub const MIN_ADDRESS_LEN: usize = 10;

/// Why a submission attempt is rejected. Checked in this order: an empty
/// order is reported before an invalid address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionError {
    EmptyOrder,
    InvalidAddress,
}

/// A delivery address is valid when it has at least `MIN_ADDRESS_LEN`
/// characters after trimming.
pub fn validate_address(address: &str) -> bool {
    address.trim().chars().count() >= MIN_ADDRESS_LEN
}

/// Submission eligibility with the reason for rejection.
pub fn check_submission(cart: &Cart, address: &str) -> Result<(), SubmissionError> {
    if cart.is_empty() {
        return Err(SubmissionError::EmptyOrder);
    }
    if !validate_address(address) {
        return Err(SubmissionError::InvalidAddress);
    }
    Ok(())
}

/// Boolean form of `check_submission`; gates the submit button.
pub fn validate_submission(cart: &Cart, address: &str) -> bool {
    check_submission(cart, address).is_ok()
}
