//  ____  ____     __        __ __        ___                  _
// |  _ \|  _ \ __ \ \      / /__\ \      / (_)______ _ _ __ __| |
// | |_) | |_) / _` \ \ /\ / / _ \\ \ /\ / /| |_  / _` | '__/ _` |
// |  _ <|  __/ (_| |\ V  V / (_) |\ V  V / | |/ / (_| | | | (_| |
// |_| \_\_|   \__,_| \_/\_/ \___/  \_/\_/  |_/___\__,_|_|  \__,_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-25
// Version : 0.1.0
// License : Mulan PSL v2
//
// A question-driven password wizard.

pub mod builder;
pub mod commands;
pub mod questions;
pub mod randgen;
pub mod scorer;
pub mod setclip;
pub mod wizard;
