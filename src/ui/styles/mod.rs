// SPDX-License-Identifier: MPL-2.0
//! Widget style functions shared by the uploader views.

pub mod button;
pub mod container;
