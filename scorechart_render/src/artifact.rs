// Copyright 2026 the Scorechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML artifact wrapping.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::surface::EncodedImage;

impl EncodedImage {
    /// Returns a self-contained `data:` URL for this image.
    #[must_use]
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

/// Wraps `image` in a minimal HTML fragment that displays it inline.
#[must_use]
pub fn html_artifact(image: &EncodedImage) -> String {
    format!("<img src=\"{}\" />\n", image.data_url())
}
