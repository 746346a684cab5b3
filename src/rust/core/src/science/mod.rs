// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
pub mod architecture;
pub mod biology;
pub mod presets;
pub mod process;
pub mod suitability;
