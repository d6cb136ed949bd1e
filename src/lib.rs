//! Workspace-level integration tests for FibAlgo live under `tests/`.
