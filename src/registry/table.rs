// SPDX-License-Identifier: PMPL-1.0-or-later

//! Curated language identifier table.
//!
//! Rows are kept in ascending code order. Canonical strings use the
//! lowercase MS form (`en_us`); tags are BCP-47 (`en-US`). Rows with neither
//! are known identifiers we deliberately carry without locale data.
//!
//! Reference: <https://learn.microsoft.com/en-us/openspecs/windows_protocols/ms-lcid/>
//!
//! ## Adding a row
//!
//! 1. Insert `entry(code, "ms_id", "tag")` at its sorted position
//! 2. Run `lcid check`; it flags duplicate codes or tags and unparsable
//!    canonical strings

use super::LanguageEntry;

const fn entry(code: u16, canonical: &'static str, tag: &'static str) -> LanguageEntry {
    LanguageEntry {
        code,
        canonical: Some(canonical),
        tag: Some(tag),
    }
}

/// Known identifier, no locale information.
const fn blank(code: u16) -> LanguageEntry {
    LanguageEntry {
        code,
        canonical: None,
        tag: None,
    }
}

/// An MS id with no BCP-47 counterpart in the table.
const fn untagged(code: u16, canonical: &'static str) -> LanguageEntry {
    LanguageEntry {
        code,
        canonical: Some(canonical),
        tag: None,
    }
}

pub(super) static LANGUAGE_TABLE: &[LanguageEntry] = &[
    // ─── Neutral (primary language) identifiers ──────────────────────
    entry(0x0001, "ar", "ar"),
    entry(0x0002, "bg", "bg"),
    entry(0x0003, "ca", "ca"),
    entry(0x0004, "zh_chs", "zh-Hans"),
    entry(0x0005, "cs", "cs"),
    entry(0x0006, "da", "da"),
    entry(0x0007, "de", "de"),
    entry(0x0008, "el", "el"),
    entry(0x0009, "en", "en"),
    entry(0x000A, "es", "es"),
    entry(0x000B, "fi", "fi"),
    entry(0x000C, "fr", "fr"),
    entry(0x000D, "he", "he"),
    entry(0x000E, "hu", "hu"),
    entry(0x000F, "is", "is"),
    entry(0x0010, "it", "it"),
    entry(0x0011, "ja", "ja"),
    entry(0x0012, "ko", "ko"),
    entry(0x0013, "nl", "nl"),
    entry(0x0014, "no", "no"),
    entry(0x0015, "pl", "pl"),
    entry(0x0016, "pt", "pt"),
    entry(0x0017, "rm", "rm"),
    entry(0x0018, "ro", "ro"),
    entry(0x0019, "ru", "ru"),
    entry(0x001A, "hr", "hr"),
    entry(0x001B, "sk", "sk"),
    entry(0x001C, "sq", "sq"),
    entry(0x001D, "sv", "sv"),
    entry(0x001E, "th", "th"),
    entry(0x001F, "tr", "tr"),
    entry(0x0020, "ur", "ur"),
    entry(0x0021, "id", "id"),
    entry(0x0022, "uk", "uk"),
    entry(0x0023, "be", "be"),
    entry(0x0024, "sl", "sl"),
    entry(0x0025, "et", "et"),
    entry(0x0026, "lv", "lv"),
    entry(0x0027, "lt", "lt"),
    entry(0x0028, "tg", "tg"),
    entry(0x0029, "fa", "fa"),
    entry(0x002A, "vi", "vi"),
    entry(0x002B, "hy", "hy"),
    entry(0x002C, "az", "az"),
    entry(0x002D, "eu", "eu"),
    entry(0x002E, "hsb", "hsb"),
    entry(0x002F, "mk", "mk"),
    entry(0x0030, "st", "st"),
    entry(0x0031, "ts", "ts"),
    entry(0x0032, "tn", "tn"),
    entry(0x0033, "ve", "ve"),
    entry(0x0034, "xh", "xh"),
    entry(0x0035, "zu", "zu"),
    entry(0x0036, "af", "af"),
    entry(0x0037, "ka", "ka"),
    entry(0x0038, "fo", "fo"),
    entry(0x0039, "hi", "hi"),
    entry(0x003A, "mt", "mt"),
    entry(0x003B, "se", "se"),
    entry(0x003C, "ga", "ga"),
    entry(0x003D, "yi", "yi"),
    entry(0x003E, "ms", "ms"),
    entry(0x003F, "kk", "kk"),
    entry(0x0040, "ky", "ky"),
    entry(0x0041, "sw", "sw"),
    entry(0x0042, "tk", "tk"),
    entry(0x0043, "uz", "uz"),
    entry(0x0044, "tt", "tt"),
    entry(0x0045, "bn", "bn"),
    entry(0x0046, "pa", "pa"),
    entry(0x0047, "gu", "gu"),
    entry(0x0048, "or", "or"),
    entry(0x0049, "ta", "ta"),
    entry(0x004A, "te", "te"),
    entry(0x004B, "kn", "kn"),
    entry(0x004C, "ml", "ml"),
    entry(0x004D, "as", "as"),
    entry(0x004E, "mr", "mr"),
    entry(0x004F, "sa", "sa"),
    entry(0x0050, "mn", "mn"),
    entry(0x0051, "bo", "bo"),
    entry(0x0052, "cy", "cy"),
    entry(0x0053, "km", "km"),
    entry(0x0054, "lo", "lo"),
    entry(0x0055, "my", "my"),
    entry(0x0056, "gl", "gl"),
    entry(0x0057, "kok", "kok"),
    entry(0x0058, "mni", "mni"),
    entry(0x0059, "sd", "sd"),
    entry(0x005A, "syr", "syr"),
    entry(0x005B, "si", "si"),
    entry(0x005C, "chr", "chr"),
    entry(0x005D, "iu", "iu"),
    entry(0x005E, "am", "am"),
    entry(0x005F, "tzm", "tzm"),
    entry(0x0060, "ks", "ks"),
    entry(0x0061, "ne", "ne"),
    entry(0x0062, "fy", "fy"),
    entry(0x0063, "ps", "ps"),
    entry(0x0064, "fil", "fil"),
    entry(0x0065, "dv", "dv"),
    entry(0x0066, "bin", "bin"),
    entry(0x0067, "ff", "ff"),
    entry(0x0068, "ha", "ha"),
    entry(0x0069, "ibb", "ibb"),
    entry(0x006A, "yo", "yo"),
    entry(0x006B, "quz", "quz"),
    entry(0x006C, "nso", "nso"),
    entry(0x006D, "ba", "ba"),
    entry(0x006E, "lb", "lb"),
    entry(0x006F, "kl", "kl"),
    entry(0x0070, "ig", "ig"),
    entry(0x0071, "kr", "kr"),
    entry(0x0072, "om", "om"),
    entry(0x0073, "ti", "ti"),
    entry(0x0074, "gn", "gn"),
    entry(0x0075, "haw", "haw"),
    entry(0x0076, "la", "la"),
    entry(0x0077, "so", "so"),
    entry(0x0078, "ii", "ii"),
    entry(0x0079, "pap", "pap"),
    entry(0x007A, "arn", "arn"),
    blank(0x007B),
    entry(0x007C, "moh", "moh"),
    blank(0x007D),
    entry(0x007E, "br", "br"),
    // invariant locale
    blank(0x007F),
    entry(0x0080, "ug", "ug"),
    entry(0x0081, "mi", "mi"),
    entry(0x0082, "oc", "oc"),
    entry(0x0083, "co", "co"),
    entry(0x0084, "gsw", "gsw"),
    entry(0x0085, "sah", "sah"),
    entry(0x0086, "qut", "qut"),
    entry(0x0087, "rw", "rw"),
    entry(0x0088, "wo", "wo"),
    blank(0x0089),
    blank(0x008A),
    blank(0x008B),
    entry(0x008C, "prs", "prs"),
    entry(0x0091, "gd", "gd"),
    entry(0x0092, "ku", "ku"),
    entry(0x0093, "quc", "quc"),
    // ─── Specific (language + region) identifiers ────────────────────
    entry(0x0401, "ar_sa", "ar-SA"),
    entry(0x0402, "bg_bg", "bg-BG"),
    entry(0x0403, "ca_es", "ca-ES"),
    entry(0x0404, "zh_tw", "zh-TW"),
    entry(0x0405, "cs_cz", "cs-CZ"),
    entry(0x0406, "da_dk", "da-DK"),
    entry(0x0407, "de_de", "de-DE"),
    entry(0x0408, "el_gr", "el-GR"),
    entry(0x0409, "en_us", "en-US"),
    entry(0x040A, "es_es_tradnl", "es-ES-tradnl"),
    entry(0x040B, "fi_fi", "fi-FI"),
    entry(0x040C, "fr_fr", "fr-FR"),
    entry(0x040D, "he_il", "he-IL"),
    entry(0x040E, "hu_hu", "hu-HU"),
    entry(0x040F, "is_is", "is-IS"),
    entry(0x0410, "it_it", "it-IT"),
    entry(0x0411, "ja_jp", "ja-JP"),
    entry(0x0412, "ko_kr", "ko-KR"),
    entry(0x0413, "nl_nl", "nl-NL"),
    entry(0x0414, "nb_no", "nb-NO"),
    entry(0x0415, "pl_pl", "pl-PL"),
    entry(0x0416, "pt_br", "pt-BR"),
    entry(0x0417, "rm_ch", "rm-CH"),
    entry(0x0418, "ro_ro", "ro-RO"),
    entry(0x0419, "ru_ru", "ru-RU"),
    entry(0x041A, "hr_hr", "hr-HR"),
    entry(0x041B, "sk_sk", "sk-SK"),
    entry(0x041C, "sq_al", "sq-AL"),
    entry(0x041D, "sv_se", "sv-SE"),
    entry(0x041E, "th_th", "th-TH"),
    entry(0x041F, "tr_tr", "tr-TR"),
    entry(0x0420, "ur_pk", "ur-PK"),
    entry(0x0421, "id_id", "id-ID"),
    entry(0x0422, "uk_ua", "uk-UA"),
    entry(0x0423, "be_by", "be-BY"),
    entry(0x0424, "sl_si", "sl-SI"),
    entry(0x0425, "et_ee", "et-EE"),
    entry(0x0426, "lv_lv", "lv-LV"),
    entry(0x0427, "lt_lt", "lt-LT"),
    entry(0x0429, "fa_ir", "fa-IR"),
    entry(0x042A, "vi_vn", "vi-VN"),
    entry(0x042B, "hy_am", "hy-AM"),
    entry(0x042C, "az_az_latn", "az-Latn-AZ"),
    entry(0x042D, "eu_es", "eu-ES"),
    entry(0x042F, "mk_mk", "mk-MK"),
    entry(0x0436, "af_za", "af-ZA"),
    entry(0x0437, "ka_ge", "ka-GE"),
    entry(0x0438, "fo_fo", "fo-FO"),
    entry(0x0439, "hi_in", "hi-IN"),
    entry(0x043A, "mt_mt", "mt-MT"),
    entry(0x043E, "ms_my", "ms-MY"),
    entry(0x043F, "kk_kz", "kk-KZ"),
    entry(0x0440, "ky_kg", "ky-KG"),
    entry(0x0441, "sw_ke", "sw-KE"),
    entry(0x0443, "uz_uz_latn", "uz-Latn-UZ"),
    entry(0x0444, "tt_ru", "tt-RU"),
    entry(0x0445, "bn_in", "bn-IN"),
    entry(0x0446, "pa_in", "pa-IN"),
    entry(0x0447, "gu_in", "gu-IN"),
    entry(0x0449, "ta_in", "ta-IN"),
    entry(0x044A, "te_in", "te-IN"),
    entry(0x044B, "kn_in", "kn-IN"),
    entry(0x044E, "mr_in", "mr-IN"),
    entry(0x044F, "sa_in", "sa-IN"),
    entry(0x0450, "mn_mn", "mn-MN"),
    entry(0x0452, "cy_gb", "cy-GB"),
    entry(0x0453, "km_kh", "km-KH"),
    entry(0x0454, "lo_la", "lo-LA"),
    entry(0x0456, "gl_es", "gl-ES"),
    entry(0x0457, "kok_in", "kok-IN"),
    entry(0x045A, "syr_sy", "syr-SY"),
    entry(0x045B, "si_lk", "si-LK"),
    entry(0x0461, "ne_np", "ne-NP"),
    entry(0x0462, "fy_nl", "fy-NL"),
    entry(0x0464, "fil_ph", "fil-PH"),
    entry(0x0465, "dv_mv", "dv-MV"),
    entry(0x046E, "lb_lu", "lb-LU"),
    entry(0x047E, "br_fr", "br-FR"),
    entry(0x0480, "ug_cn", "ug-CN"),
    entry(0x0481, "mi_nz", "mi-NZ"),
    entry(0x0482, "oc_fr", "oc-FR"),
    entry(0x0483, "co_fr", "co-FR"),
    entry(0x0491, "gd_gb", "gd-GB"),
    entry(0x0801, "ar_iq", "ar-IQ"),
    entry(0x0804, "zh_cn", "zh-CN"),
    entry(0x0807, "de_ch", "de-CH"),
    entry(0x0809, "en_gb", "en-GB"),
    entry(0x080A, "es_mx", "es-MX"),
    entry(0x080C, "fr_be", "fr-BE"),
    entry(0x0810, "it_ch", "it-CH"),
    entry(0x0813, "nl_be", "nl-BE"),
    entry(0x0814, "nn_no", "nn-NO"),
    entry(0x0816, "pt_pt", "pt-PT"),
    entry(0x0818, "ro_md", "ro-MD"),
    entry(0x0819, "ru_md", "ru-MD"),
    entry(0x081A, "sr_cs_latn", "sr-Latn-CS"),
    entry(0x081D, "sv_fi", "sv-FI"),
    entry(0x082C, "az_az_cyrl", "az-Cyrl-AZ"),
    entry(0x083C, "ga_ie", "ga-IE"),
    entry(0x083E, "ms_bn", "ms-BN"),
    entry(0x0843, "uz_uz_cyrl", "uz-Cyrl-UZ"),
    entry(0x0C01, "ar_eg", "ar-EG"),
    entry(0x0C04, "zh_hk", "zh-HK"),
    entry(0x0C07, "de_at", "de-AT"),
    entry(0x0C09, "en_au", "en-AU"),
    entry(0x0C0A, "es_es", "es-ES"),
    entry(0x0C0C, "fr_ca", "fr-CA"),
    entry(0x0C1A, "sr_cs_cyrl", "sr-Cyrl-CS"),
    entry(0x1001, "ar_ly", "ar-LY"),
    entry(0x1004, "zh_sg", "zh-SG"),
    entry(0x1007, "de_lu", "de-LU"),
    entry(0x1009, "en_ca", "en-CA"),
    entry(0x100A, "es_gt", "es-GT"),
    entry(0x100C, "fr_ch", "fr-CH"),
    entry(0x101A, "hr_ba", "hr-BA"),
    entry(0x1401, "ar_dz", "ar-DZ"),
    entry(0x1404, "zh_mo", "zh-MO"),
    entry(0x1407, "de_li", "de-LI"),
    entry(0x1409, "en_nz", "en-NZ"),
    entry(0x140A, "es_cr", "es-CR"),
    entry(0x140C, "fr_lu", "fr-LU"),
    entry(0x1801, "ar_ma", "ar-MA"),
    entry(0x1809, "en_ie", "en-IE"),
    entry(0x180A, "es_pa", "es-PA"),
    entry(0x180C, "fr_mc", "fr-MC"),
    entry(0x1C01, "ar_tn", "ar-TN"),
    entry(0x1C09, "en_za", "en-ZA"),
    entry(0x1C0A, "es_do", "es-DO"),
    entry(0x2001, "ar_om", "ar-OM"),
    entry(0x2009, "en_jm", "en-JM"),
    entry(0x200A, "es_ve", "es-VE"),
    entry(0x2401, "ar_ye", "ar-YE"),
    entry(0x2409, "en_029", "en-029"),
    entry(0x240A, "es_co", "es-CO"),
    entry(0x2801, "ar_sy", "ar-SY"),
    entry(0x2809, "en_bz", "en-BZ"),
    entry(0x280A, "es_pe", "es-PE"),
    entry(0x2C01, "ar_jo", "ar-JO"),
    entry(0x2C09, "en_tt", "en-TT"),
    entry(0x2C0A, "es_ar", "es-AR"),
    entry(0x3001, "ar_lb", "ar-LB"),
    entry(0x3009, "en_zw", "en-ZW"),
    entry(0x300A, "es_ec", "es-EC"),
    entry(0x3401, "ar_kw", "ar-KW"),
    entry(0x3409, "en_ph", "en-PH"),
    entry(0x340A, "es_cl", "es-CL"),
    entry(0x3801, "ar_ae", "ar-AE"),
    entry(0x380A, "es_uy", "es-UY"),
    entry(0x3C01, "ar_bh", "ar-BH"),
    entry(0x3C0A, "es_py", "es-PY"),
    entry(0x4001, "ar_qa", "ar-QA"),
    entry(0x4009, "en_in", "en-IN"),
    entry(0x400A, "es_bo", "es-BO"),
    entry(0x4409, "en_my", "en-MY"),
    entry(0x440A, "es_sv", "es-SV"),
    entry(0x4809, "en_sg", "en-SG"),
    entry(0x480A, "es_hn", "es-HN"),
    entry(0x4C0A, "es_ni", "es-NI"),
    entry(0x500A, "es_pr", "es-PR"),
    entry(0x540A, "es_us", "es-US"),
    entry(0x7C04, "zh_cht", "zh-Hant"),
    // ─── MS ids without a tag, see `UNTAGGED_MS_IDS` ─────────────────
    untagged(0xE40C, "fr-015"),
];
