//! Static register-file layouts for the thermal-management top and its
//! scheduler/standardization blocks, with the bring-up default values.
//!
//! Bit positions mirror the RTL register map; reserved ranges are simply
//! left unclaimed and pack to zero.

use regforge::{ConfigField, RegFile};

/// THERM_TOP control/config block.
#[rustfmt::skip]
pub const THERM_TOP: RegFile = RegFile {
    name: "THERM_TOP CONFIG REGFILE",
    base_addr: 0x6000_2218,
    word_count: 4,
    fields: &[
        // Word 0: control bits, iteration count, sampling interval
        ConfigField { name: "therm_top_start", value: 1, width: 1, offset: 0, word: 0 },
        ConfigField { name: "therm_top_en", value: 1, width: 1, offset: 1, word: 0 },
        ConfigField { name: "therm_top_stop", value: 0, width: 1, offset: 2, word: 0 },
        ConfigField { name: "collect_en", value: 1, width: 1, offset: 3, word: 0 },
        ConfigField { name: "collect_mode", value: 0, width: 1, offset: 4, word: 0 },
        ConfigField { name: "pred_en", value: 0, width: 1, offset: 5, word: 0 },
        ConfigField { name: "schedule_en", value: 0, width: 1, offset: 6, word: 0 },
        ConfigField { name: "store_sensor_en", value: 1, width: 1, offset: 7, word: 0 },
        ConfigField { name: "store_pred_en", value: 0, width: 1, offset: 8, word: 0 },
        ConfigField { name: "store_action_en", value: 0, width: 1, offset: 9, word: 0 },
        ConfigField { name: "action_offset", value: 4, width: 5, offset: 10, word: 0 },
        ConfigField { name: "num_itr", value: 10, width: 17, offset: 15, word: 0 },
        ConfigField { name: "sampling_intvl", value: 200, width: 32, offset: 32, word: 0 },
        // Word 1: data buffer base addresses
        ConfigField { name: "sensor_data_base_addr", value: 0xF000, width: 32, offset: 0, word: 1 },
        ConfigField { name: "pred_data_base_addr", value: 0x2000, width: 32, offset: 32, word: 1 },
        // Word 2: NPU buffer offsets and synthetic sensor encodings; [31:20] reserved
        ConfigField { name: "npu_input_buf_base_addr", value: 0x10, width: 10, offset: 0, word: 2 },
        ConfigField { name: "npu_output_buf_base_addr", value: 0x5, width: 10, offset: 10, word: 2 },
        ConfigField { name: "synthetic_sensor_thermal_encodings", value: 10, width: 8, offset: 32, word: 2 },
        ConfigField { name: "synthetic_sensor_current_encodings", value: 20, width: 8, offset: 40, word: 2 },
        ConfigField { name: "synthetic_sensor_voltage_encodings", value: 30, width: 8, offset: 48, word: 2 },
        // Word 3: synthetic action sequence and its buffer address; [31:24] reserved
        ConfigField { name: "synthetic_action_sequence", value: 342_391, width: 24, offset: 0, word: 3 },
        ConfigField { name: "action_base_addr", value: 0x2800, width: 32, offset: 32, word: 3 },
    ],
};

/// RL scheduler configuration block.
#[rustfmt::skip]
pub const RL_CONFIG: RegFile = RegFile {
    name: "RL_CONFIG REGFILE",
    base_addr: 0x6000_0000,
    word_count: 3,
    fields: &[
        // Word 0: reward coefficients and learning rate (fixed point)
        ConfigField { name: "coef_k1", value: 0x1000, width: 16, offset: 0, word: 0 },
        ConfigField { name: "coef_k2", value: 0x0800, width: 16, offset: 16, word: 0 },
        ConfigField { name: "coef_k3", value: 0x0400, width: 16, offset: 32, word: 0 },
        ConfigField { name: "learning_rate", value: 0x0100, width: 16, offset: 48, word: 0 },
        // Word 1: policy parameters and thermal thresholds
        ConfigField { name: "discount_factor", value: 0x0200, width: 16, offset: 0, word: 1 },
        ConfigField { name: "initial_epsilon", value: 0x0F00, width: 16, offset: 16, word: 1 },
        ConfigField { name: "num_active_actions", value: 8, width: 8, offset: 32, word: 1 },
        ConfigField { name: "thres_high", value: 0x50, width: 8, offset: 40, word: 1 },
        ConfigField { name: "thres_mid", value: 0x30, width: 8, offset: 48, word: 1 },
        ConfigField { name: "thres_low", value: 0x10, width: 8, offset: 56, word: 1 },
        // Word 2: epsilon decay schedule
        ConfigField { name: "epsilon_decay_step", value: 0x00CC, width: 16, offset: 0, word: 2 },
        ConfigField { name: "epsilon_min", value: 0x0005, width: 16, offset: 16, word: 2 },
        ConfigField { name: "epsilon_decay_factor", value: 0x000A, width: 16, offset: 32, word: 2 },
        ConfigField { name: "epsilon_decay_interval", value: 0x10, width: 8, offset: 48, word: 2 },
        ConfigField { name: "epsilon_decay_mode", value: 0, width: 2, offset: 56, word: 2 },
    ],
};

/// Standardization unit, quantization side (sensor 0 calibration defaults;
/// the remaining sensors repeat the layout at higher word indices).
#[rustfmt::skip]
pub const QUANT_UNIT: RegFile = RegFile {
    name: "QUANT_UNIT REGFILE",
    base_addr: 0x6000_2018,
    word_count: 1,
    fields: &[
        ConfigField { name: "thermal_scale_mult", value: 0x0100, width: 16, offset: 0, word: 0 },
        ConfigField { name: "thermal_scale_shift", value: 0, width: 6, offset: 16, word: 0 },
        ConfigField { name: "thermal_zero_point", value: 40, width: 8, offset: 22, word: 0 },
        ConfigField { name: "power_scale_mult", value: 0x0200, width: 16, offset: 32, word: 0 },
        ConfigField { name: "power_scale_shift", value: 10, width: 6, offset: 48, word: 0 },
        ConfigField { name: "power_zero_point", value: 20, width: 8, offset: 54, word: 0 },
    ],
};

/// Standardization unit, dequantization side (sensor 0 defaults).
#[rustfmt::skip]
pub const DEQUANT_UNIT: RegFile = RegFile {
    name: "DEQUANT_UNIT REGFILE",
    base_addr: 0x6000_2118,
    word_count: 1,
    fields: &[
        ConfigField { name: "dequant_scale", value: 0x00C0, width: 16, offset: 0, word: 0 },
        ConfigField { name: "dequant_shift", value: 6, width: 6, offset: 16, word: 0 },
        ConfigField { name: "dequant_zero", value: 120, width: 8, offset: 22, word: 0 },
    ],
};

/// Every block the `regfile` subcommand reports, in address-map order
/// of the documentation.
pub const ALL: &[RegFile] = &[THERM_TOP, RL_CONFIG, QUANT_UNIT, DEQUANT_UNIT];
