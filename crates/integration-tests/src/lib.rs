//! End-to-end tests for the transcriber live under `tests/`
