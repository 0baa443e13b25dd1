// ==========================================
// 机组利用率分析 - 机组命名生成器
// ==========================================
// 算法: 前缀 × 后缀 笛卡尔积 → 随机洗牌 → 取前 count 个
// 保证: 同一次调用内 (prefix, suffix) 不重复
// 随机源: 由调用方传入，固定种子下输出顺序可复现
// ==========================================

use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

/// 默认连接符
pub const NAME_SEPARATOR: char = '-';

/// 词表数量低于此值时记录告警
const MIN_EXPECTED_VOCABULARY: usize = 60;

// 玩具总动员风格前缀（角色、物件、地点）
pub const PREFIXES: &[&str] = &[
    "Buzz", "Woody", "Jessie", "Rex", "Hamm", "Slinky", "BoPeep", "Alien", "Zurg", "Lotso",
    "Star", "Pizza", "Claw", "Bullseye", "Andy", "Infini", "Beyond", "RC", "Tricera",
    "Bucket", "GreenArmy", "Dolly", "Trixie", "PotatoHead", "Forky", "Ducky", "Bunny",
    "Caboom", "Gabby", "Peas", "Wheezy", "Barbie", "Ken", "Etch", "Rocky", "CombatCarl",
    "Janie", "Sharky", "Chuckles", "Twitch", "Stretch", "Chunk", "Sparks", "RoadRunner",
    "Linguini", "Sid", "Sunnyside", "AlToy", "ToyBarn", "Pawn", "Rocket", "SpaceRanger",
    "Sheriff", "Deputy", "WildWest", "Playhouse", "Cloud", "Plasma", "Laser", "Power",
    "Friend", "Loyal", "Playtime", "Adventure", "Destiny", "Mission", "Dinoco", "Sky",
    "Reach", "Garage", "Attic", "Dumpster", "TriCounty", "Ceiling", "Rebel",
];

// 机组/系统技术词汇
pub const SUFFIXES: &[&str] = &[
    "Core", "Server", "Node", "Unit", "Engine", "Bot", "Link", "System", "Hub", "Module",
    "Command", "Bay", "Delta", "Forge", "Relay", "Matrix", "Guard", "Pilot", "Transit",
    "Compute", "Box", "Cluster", "Cloud", "Stack", "Layer", "Proxy", "Gateway", "Vault",
    "Array", "Cache", "Stream", "Beacon", "Conduit", "Frame", "Host", "Grid", "Fabric",
    "Zone", "Cell", "Router", "Switch", "Worker", "Handler", "Agent", "Controller",
    "Manager", "Monitor", "Supervisor", "Director", "Keeper", "Logger", "Scanner",
    "Indexer", "Pylon", "Sentinel", "Nexus", "Orbit", "Vector", "Chronos", "Atlas",
    "Titan", "Nova", "Xfer", "Port", "Pipe", "Data", "Wire", "Beam", "Drive", "Logic",
    "Output", "Input", "Terminal",
];

// ==========================================
// GeneratedNames - 生成结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedNames {
    /// 生成的机组名称（有序、唯一）
    pub names: Vec<String>,

    /// 请求数量
    pub requested: usize,

    /// 组合池大小 (P × S)
    pub pool_size: usize,

    /// 请求数量超出组合池，结果已截断为 pool_size
    pub exhausted: bool,
}

// ==========================================
// NameGenerator - 命名生成器
// ==========================================
#[derive(Debug, Clone)]
pub struct NameGenerator {
    prefixes: Vec<String>,
    suffixes: Vec<String>,
    separator: char,
}

impl Default for NameGenerator {
    fn default() -> Self {
        Self::with_vocabulary(PREFIXES, SUFFIXES, NAME_SEPARATOR)
    }
}

impl NameGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用自定义词表
    pub fn with_vocabulary(prefixes: &[&str], suffixes: &[&str], separator: char) -> Self {
        let generator = Self {
            prefixes: prefixes.iter().map(|s| s.to_string()).collect(),
            suffixes: suffixes.iter().map(|s| s.to_string()).collect(),
            separator,
        };

        if generator.below_expected_vocabulary() {
            tracing::warn!(
                prefixes = prefixes.len(),
                suffixes = suffixes.len(),
                "前缀或后缀词表小于预期 ({})",
                MIN_EXPECTED_VOCABULARY
            );
        }

        generator
    }

    /// 任一词表少于预期规模（只告警，不影响生成）
    pub fn below_expected_vocabulary(&self) -> bool {
        self.prefixes.len() < MIN_EXPECTED_VOCABULARY
            || self.suffixes.len() < MIN_EXPECTED_VOCABULARY
    }

    /// 组合池大小
    pub fn pool_size(&self) -> usize {
        self.prefixes.len() * self.suffixes.len()
    }

    /// 生成 count 个唯一机组名称
    ///
    /// # 参数
    /// - rng: 调用方持有的随机源（与后续闲置小时抽样共用）
    /// - count: 请求数量，超出组合池时返回整个组合池
    pub fn generate_names<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> GeneratedNames {
        let mut combinations: Vec<(&str, &str)> = self
            .prefixes
            .iter()
            .map(String::as_str)
            .cartesian_product(self.suffixes.iter().map(String::as_str))
            .collect();

        combinations.shuffle(rng);

        let pool_size = combinations.len();
        let exhausted = count > pool_size;
        if exhausted {
            tracing::warn!(
                requested = count,
                pool_size,
                "请求的机组名称数量超出组合池，返回全部组合"
            );
        }

        let names: Vec<String> = combinations
            .into_iter()
            .take(count)
            .map(|(prefix, suffix)| format!("{}{}{}", prefix, self.separator, suffix))
            .collect();

        tracing::debug!(generated = names.len(), pool_size, "机组名称生成完成");

        GeneratedNames {
            names,
            requested: count,
            pool_size,
            exhausted,
        }
    }
}
