use crate::catalog::{CategoryDefinition, UnitDefinition};

/// 저장 용량 카테고리. 내부 기준은 바이트이며 접두어는 1024 배수이다.
pub fn category() -> CategoryDefinition {
    CategoryDefinition::new("digital", "Digital Storage", "bytes")
        .unit(UnitDefinition::linear("bits", "Bits", "b", 0.125))
        .unit(UnitDefinition::linear("bytes", "Bytes", "B", 1.0))
        .unit(UnitDefinition::linear("kilobytes", "Kilobytes", "KB", 1024.0))
        .unit(UnitDefinition::linear("megabytes", "Megabytes", "MB", 1_048_576.0))
        .unit(UnitDefinition::linear("gigabytes", "Gigabytes", "GB", 1_073_741_824.0))
        .unit(UnitDefinition::linear("terabytes", "Terabytes", "TB", 1_099_511_627_776.0))
        .pair("megabytes", "kilobytes", "1 MB = 1024 KB")
        .pair("gigabytes", "megabytes", "1 GB = 1024 MB")
        .pair("terabytes", "gigabytes", "1 TB = 1024 GB")
        .pair("bytes", "bits", "1 B = 8 b")
        .default_pair("megabytes-kilobytes")
}
