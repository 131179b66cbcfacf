//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Voice Context: 已安装音色的解析与筛选

pub mod voice;
