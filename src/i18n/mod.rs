// SPDX-License-Identifier: MPL-2.0
//! Localization with Fluent.
//!
//! Translation files are embedded in the binary. The active locale comes from
//! `--lang`, then the config file, then the operating system, falling back to
//! `en-US`. Missing keys render as `MISSING: <key>` instead of failing.

pub mod fluent;
