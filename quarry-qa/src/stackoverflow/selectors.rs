//! The site contract: every CSS selector the workflow depends on, named by
//! the role the element plays. These are external surface owned by the site;
//! a markup change breaks the run with a role-named error.

/// Email field on the login form.
pub const LOGIN_EMAIL: &str = "#email";

/// Password field on the login form.
pub const LOGIN_PASSWORD: &str = "#password";

/// Submit button on the login form.
pub const LOGIN_SUBMIT: &str = "#submit-button";

/// Present only once the session is authenticated (the topbar user card).
/// Waiting on this replaces a blind post-login sleep.
pub const AUTH_INDICATOR: &str = ".s-topbar--item.s-user-card";

/// The site-wide search field in the topbar.
pub const SEARCH_FIELD: &str = ".s-input.s-input__search.js-search-field";

/// The search results layout region; clicked once to move focus out of the
/// search field before touching pagination.
pub const RESULTS_LAYOUT: &str = ".grid.ps-relative";

/// The pagination strip under the search results.
pub const PAGINATION_CONTROL: &str = ".s-pagination";

/// The pagination affordance that advances to the next page of results.
pub const PAGINATION_NEXT: &str = "a[rel=\"next\"]";

/// Anchor inside each search result row; its `href` is the candidate link.
pub const RESULT_LINKS: &str = ".result-link a";

/// The question title link on a question page.
pub const QUESTION_TITLE: &str = ".fs-headline1 a";

/// Prose blocks on a question page, in document order; the first is the
/// question body.
pub const PROSE_BLOCKS: &str = ".s-prose";

/// The accepted answer's prose block.
pub const ACCEPTED_ANSWER: &str = ".answer.accepted-answer .s-prose";
