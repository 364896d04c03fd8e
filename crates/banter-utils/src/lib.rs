// banter-core-client/banter-utils
//
// Copyright: 2026, Banter Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

mod id_string_macro;
mod id_u64_macro;
