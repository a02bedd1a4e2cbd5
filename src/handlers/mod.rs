//! Input dispatch: every key event runs one handler to completion on the
//! UI thread before the next event is processed.

pub mod keyboard;
