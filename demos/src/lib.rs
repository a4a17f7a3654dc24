// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for the Thicket crates. See the `examples/` directory.
