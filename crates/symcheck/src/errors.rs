//! Exit codes for symcheck.
//!
//! Standard exit codes for the different failure modes, so scripts can
//! tell bad input apart from a failing endpoint.

use symcheck_core::{RequestState, EMPTY_INPUT_MESSAGE};

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when the submission was empty
pub const EXIT_EMPTY_INPUT: i32 = 64;

/// Exit code when the analysis endpoint failed or was unreachable
pub const EXIT_ENDPOINT_FAILURE: i32 = 70;

/// Exit code when no endpoint is configured
pub const EXIT_NO_ENDPOINT: i32 = 78;

/// Map a terminal request state to a process exit code.
pub fn exit_code_for(state: &RequestState) -> i32 {
    match state {
        RequestState::Succeeded { .. } => EXIT_SUCCESS,
        RequestState::Failed { message } if message == EMPTY_INPUT_MESSAGE => EXIT_EMPTY_INPUT,
        RequestState::Failed { .. } => EXIT_ENDPOINT_FAILURE,
        RequestState::Idle | RequestState::Loading => EXIT_GENERAL_ERROR,
    }
}
