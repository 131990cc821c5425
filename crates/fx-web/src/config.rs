use fx_core::EffectParams;
use web_sys as web;

/// Read tuning overrides from `data-*` attributes on `<body>`, e.g.
/// `<body data-density-divisor="20000" data-smoothing="0.2">`.
pub fn read_params(document: &web::Document) -> EffectParams {
    let Some(body) = document.body() else {
        return EffectParams::default();
    };
    let (params, rejected) =
        EffectParams::from_overrides(|key| body.get_attribute(&format!("data-{key}")));
    for e in rejected {
        log::warn!("[config] ignoring override: {}", e);
    }
    params
}
