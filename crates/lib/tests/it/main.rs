/*! Integration tests for formtree.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - tree: Tests for path addressing, value updates, array items and search
 * - validation: Tests for required-field validation over whole trees
 * - projection: Tests for data projection, export and YAML inference
 * - import: Tests for JSON and YAML import
 * - share: Tests for share link encoding and decoding
 * - draft: Tests for draft persistence
 * - builder: Tests for editing sessions
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("formtree=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod builder;
mod draft;
mod helpers;
mod import;
mod projection;
mod share;
mod tree;
