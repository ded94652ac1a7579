/*! Test coverage for the IR model and the standards registry.
 *
 * Confidence scoring decides how contracts are classified, so it gets the bulk of the coverage here:
 * full and partial matches, overloads, event index flags and registry construction. Schema tests
 * check that the second projection carries the same tree as the serde one.
 */

mod schema_tests;
mod standards_tests;
