//! Operation ids understood by the host at the `ecall` boundary.
//!
//! A host call carries one of these ids plus up to [`HOST_CALL_MAX_ARGS`]
//! register-width arguments and returns a single register-width value.
//!
//! The runtime itself issues only PUTCHAR, WRITE, EXIT and DEBUG_LOG. The
//! remaining ids name host kernels and are exported for guest-side wrappers
//! built on `runtime::HostCall`.

pub const HOST_CALL_MAX_ARGS: usize = 7;

/// File descriptor the host treats as the guest's log stream.
pub const STDOUT_FD: usize = 1;

// Console and process control.
pub const SYS_PUTCHAR: u32 = 60;
pub const SYS_WRITE: u32 = 64;
pub const SYS_EXIT: u32 = 93;
pub const SYS_YIELD: u32 = 123;
pub const SYS_DEBUG_LOG: u32 = 122;

// f32 kernels.
pub const SYS_MATMUL: u32 = 110;
pub const SYS_RMSNORM: u32 = 111;
pub const SYS_SOFTMAX: u32 = 112;
pub const SYS_SILU: u32 = 113;
pub const SYS_ROPE: u32 = 114;
pub const SYS_MATMUL_Q8: u32 = 115;
pub const SYS_ACCUM: u32 = 116;
pub const SYS_READ_F32: u32 = 117;
pub const SYS_WRITE_F32: u32 = 118;
pub const SYS_MEMCPY_F32: u32 = 119;
pub const SYS_MATMUL_Q8_PARTIAL: u32 = 120;
pub const SYS_ARGMAX_PARTIAL: u32 = 121;

// Integer kernels.
pub const SYS_MATMUL_I8_I32: u32 = 130;
pub const SYS_SOFTMAX_I32: u32 = 131;
pub const SYS_DOT_I32: u32 = 132;
pub const SYS_WEIGHTED_SUM_I32: u32 = 133;
pub const SYS_MATMUL_I8_I32_PARTIAL: u32 = 134;
pub const SYS_ARGMAX_I32_PARTIAL: u32 = 135;
pub const SYS_SOFTMAX_I32_F32: u32 = 136;
pub const SYS_SILU_MUL_I32: u32 = 137;
pub const SYS_RMSNORM_I32: u32 = 138;
pub const SYS_MATMUL_I8_I8: u32 = 139;
pub const SYS_MATMUL_I8_I8_PARTIAL: u32 = 140;
pub const SYS_MATMUL_I8_I8_QKV: u32 = 141;
pub const SYS_MATMUL_I8_I8_W1W3: u32 = 142;
pub const SYS_MATMUL_I8_I8_ARGMAX: u32 = 143;
pub const SYS_MATMUL_I8_I8_W1W3_SILU: u32 = 144;

pub const SYS_DOT_I8: u32 = 7001;
pub const SYS_VEC_ADD_I8: u32 = 7003;
pub const SYS_ACTIVATION: u32 = 7010;

// Search and scoring.
pub const SYS_GRAPH_SEARCH: u32 = 8001;
pub const SYS_GRAPH_SEARCH_ALT: u32 = 8002;
pub const SYS_ARB_SEARCH: u32 = 8005;
pub const SYS_ARB_SCORE: u32 = 8010;
pub const SYS_AGGREGATE: u32 = 8020;

pub const SYS_QUANTUM_OP: u32 = 9000;
