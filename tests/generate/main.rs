//! End-to-end generation tests.
//!
//! These tests drive dataforge the way a user does:
//! 1. Build a configuration (from arguments or the library API)
//! 2. Validate it
//! 3. Generate records to files or stdout
//! 4. Check file names, line counts and record contents

mod binary;
mod files;
