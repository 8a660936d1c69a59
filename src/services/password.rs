// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Password hashing (bcrypt).

use anyhow::Context;

/// bcrypt work factor for stored passwords.
pub const HASH_COST: u32 = 10;

/// Hash a plaintext password with a fresh random salt.
///
/// This is CPU bound; call it from `spawn_blocking` in async code.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    bcrypt::hash(plain, HASH_COST).context("bcrypt hash failed")
}

/// Check a plaintext password against a stored hash.
///
/// No route verifies passwords; tests use this to check what was stored.
pub fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    bcrypt::verify(plain, hash).context("bcrypt verify failed")
}
