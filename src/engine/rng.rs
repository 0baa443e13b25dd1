// ==========================================
// 机组利用率分析 - 随机源
// ==========================================
// 进程内只在入口处播种一次，之后以 &mut 显式传递给
// 命名生成器与利用率合成器，抽样顺序即复现契约
// ==========================================

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// 模拟用随机源
pub type SimRng = ChaCha8Rng;

/// 由种子创建随机源
pub fn seeded_rng(seed: u64) -> SimRng {
    ChaCha8Rng::seed_from_u64(seed)
}
