// Copyright 2026 the Unicode Scripts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod test_mixed;
mod utils;
