use crate::server::error::AppError;

/// Bcrypt password hashing with a configurable cost.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn hash(&self, plain: &str) -> Result<String, AppError> {
        Ok(bcrypt::hash(plain, self.cost)?)
    }

    /// Checks `plain` against a stored hash; malformed hashes never match.
    pub fn verify(&self, plain: &str, hash: &str) -> bool {
        bcrypt::verify(plain, hash).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Lowest cost bcrypt accepts.
    const TEST_COST: u32 = 4;

    #[test]
    fn verifies_own_hash() {
        let hasher = PasswordHasher::new(TEST_COST);
        let hash = hasher.hash("Secret@123").unwrap();

        assert!(hasher.verify("Secret@123", &hash));
        assert!(!hasher.verify("Secret@124", &hash));
    }

    #[test]
    fn malformed_hash_does_not_verify() {
        let hasher = PasswordHasher::new(TEST_COST);
        assert!(!hasher.verify("Secret@123", "not-a-hash"));
    }
}
