pub fn origin() -> String {
	gloo_utils::window().location().origin().unwrap_or_default()
}

pub async fn copy_to_clipboard(text: String) -> anyhow::Result<()> {
	let clipboard = gloo_utils::window().navigator().clipboard();
	wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
		.await
		.map_err(|err| anyhow::anyhow!("clipboard write rejected: {err:?}"))?;
	Ok(())
}
