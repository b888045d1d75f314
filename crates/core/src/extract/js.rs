//! In-page collection snippets.
//!
//! Each snippet is an IIFE evaluated through [`RenderablePage::evaluate`]
//! and returns a JSON-serializable value matching a deserialization type in
//! [`super::snapshot`]. Snippets are pure reads of the live DOM/CSSOM except
//! [`DARK_MODE_TOGGLE_JS`], which flips theme markers for the dark variant
//! pass. Cross-origin stylesheets are skipped with try/catch, never fatal.
//!
//! [`RenderablePage::evaluate`]: crate::page::RenderablePage::evaluate

/// Per-element color observations, visible-element total, and declared
/// custom properties, in DOM-walk order.
pub(crate) const COLLECT_COLORS_JS: &str = r##"(() => {
	const hidden = (cs) => cs.display === 'none' || cs.visibility === 'hidden' || parseFloat(cs.opacity) === 0;
	const elements = [];
	let totalVisible = 0;
	for (const el of document.querySelectorAll('*')) {
		const cs = getComputedStyle(el);
		if (hidden(cs)) continue;
		totalVisible += 1;
		const cls = typeof el.className === 'string' ? el.className : '';
		const classId = (cls + ' ' + (el.id || '')).trim();
		elements.push({ classId, background: cs.backgroundColor, foreground: cs.color });
	}
	const cssVariables = [];
	for (const sheet of document.styleSheets) {
		let rules;
		try { rules = sheet.cssRules; } catch (e) { continue; }
		if (!rules) continue;
		for (const rule of rules) {
			if (!rule.style) continue;
			for (let i = 0; i < rule.style.length; i++) {
				const prop = rule.style[i];
				if (prop.startsWith('--')) {
					cssVariables.push({ name: prop, value: rule.style.getPropertyValue(prop).trim() });
				}
			}
		}
	}
	return { totalVisible, elements, cssVariables };
})()"##;

/// Computed font tuples for the broad text-bearing selector set, plus
/// external font-stylesheet hosts and declared `@font-face` family names.
pub(crate) const COLLECT_TYPOGRAPHY_JS: &str = r##"(() => {
	const selector = [
		'h1', 'h2', 'h3', 'h4', 'h5', 'h6', 'p', 'span', 'li', 'td', 'th', 'dt', 'dd',
		'label', 'a', 'button', 'blockquote', 'figcaption',
		'[role="button"]', '[role="heading"]',
		'.title', '.subtitle', '.heading', '.caption', '[class*="hero"]',
	].join(', ');
	const records = [];
	for (const el of document.querySelectorAll(selector)) {
		const cs = getComputedStyle(el);
		if (cs.display === 'none' || cs.visibility === 'hidden') continue;
		records.push({
			tag: el.tagName.toLowerCase(),
			role: el.getAttribute('role') || '',
			hasHref: el.hasAttribute('href'),
			classId: ((typeof el.className === 'string' ? el.className : '') + ' ' + (el.id || '')).trim(),
			family: cs.fontFamily,
			size: cs.fontSize,
			weight: cs.fontWeight,
			style: cs.fontStyle,
			decoration: cs.textDecorationLine,
			letterSpacing: cs.letterSpacing,
			transform: cs.textTransform,
			lineHeight: cs.lineHeight,
		});
	}
	const fontHosts = ['fonts.googleapis.com', 'fonts.gstatic.com', 'use.typekit.net', 'fonts.bunny.net', 'cloud.typography.com'];
	const sources = [];
	for (const link of document.querySelectorAll('link[href]')) {
		try {
			const host = new URL(link.href, location.href).hostname;
			if (fontHosts.includes(host) && !sources.includes(host)) sources.push(host);
		} catch (e) {}
	}
	const fontFaceFamilies = [];
	for (const sheet of document.styleSheets) {
		let rules;
		try { rules = sheet.cssRules; } catch (e) { continue; }
		if (!rules) continue;
		for (const rule of rules) {
			if (!(rule instanceof CSSFontFaceRule)) continue;
			const family = rule.style.getPropertyValue('font-family').trim().replace(/^["']+|["']+$/g, '');
			if (family && !fontFaceFamilies.includes(family)) fontFaceFamilies.push(family);
		}
	}
	return { records, sources, fontFaceFamilies };
})()"##;

/// Spacing/radius/shadow value counts over visible elements.
pub(crate) const COLLECT_METRICS_JS: &str = r##"(() => {
	const spacing = {}, radius = {}, shadows = {};
	const bump = (map, key) => { map[key] = (map[key] || 0) + 1; };
	for (const el of document.querySelectorAll('*')) {
		const cs = getComputedStyle(el);
		if (cs.display === 'none' || cs.visibility === 'hidden') continue;
		const candidates = [
			cs.paddingTop, cs.paddingBottom, cs.paddingLeft, cs.paddingRight,
			cs.marginTop, cs.marginBottom, cs.rowGap, cs.columnGap,
		];
		for (const v of candidates) {
			if (v && v !== '0px' && v.endsWith('px')) bump(spacing, v);
		}
		if (cs.borderRadius && cs.borderRadius !== '0px') bump(radius, cs.borderRadius);
		if (cs.boxShadow && cs.boxShadow !== 'none') bump(shadows, cs.boxShadow);
	}
	return { spacing, radius, shadows };
})()"##;

/// Bounded samples of button/input/link computed styles.
pub(crate) const COLLECT_COMPONENTS_JS: &str = r##"(() => {
	const buttons = [];
	const buttonSel = 'button, [role="button"], input[type="submit"], a[class*="btn"], a[class*="button"]';
	for (const el of Array.from(document.querySelectorAll(buttonSel)).slice(0, 10)) {
		const cs = getComputedStyle(el);
		buttons.push({
			backgroundColor: cs.backgroundColor,
			color: cs.color,
			borderRadius: cs.borderRadius,
			padding: cs.padding,
			fontSize: cs.fontSize,
			fontWeight: cs.fontWeight,
			border: cs.border,
			boxShadow: cs.boxShadow,
		});
	}
	const inputs = [];
	for (const el of document.querySelectorAll('input:not([type="hidden"]), textarea, select')) {
		const cs = getComputedStyle(el);
		inputs.push({
			backgroundColor: cs.backgroundColor,
			color: cs.color,
			border: cs.border,
			borderRadius: cs.borderRadius,
			padding: cs.padding,
			fontSize: cs.fontSize,
		});
	}
	const links = [];
	for (const el of Array.from(document.querySelectorAll('a[href]')).slice(0, 20)) {
		const cs = getComputedStyle(el);
		links.push({ color: cs.color, textDecoration: cs.textDecorationLine, fontWeight: cs.fontWeight });
	}
	return { buttons, inputs, links };
})()"##;

/// Media-query texts, stylesheet hrefs, and markup samples used by the
/// breakpoint and signature detectors.
pub(crate) const COLLECT_SIGNALS_JS: &str = r##"(() => {
	const mediaTexts = [];
	const stylesheetHrefs = [];
	for (const sheet of document.styleSheets) {
		if (sheet.href) stylesheetHrefs.push(sheet.href);
		let rules;
		try { rules = sheet.cssRules; } catch (e) { continue; }
		if (!rules) continue;
		for (const rule of rules) {
			if (rule.media && rule.media.mediaText) mediaTexts.push(rule.media.mediaText);
		}
	}
	const classNames = new Set();
	outer: for (const el of document.querySelectorAll('[class]')) {
		for (const c of el.classList) {
			classNames.add(c);
			if (classNames.size >= 400) break outer;
		}
	}
	return {
		mediaTexts,
		stylesheetHrefs,
		classSample: Array.from(classNames).join(' '),
		headSample: document.head ? document.head.innerHTML.slice(0, 20000) : '',
	};
})()"##;

/// Canvas-rendering heuristic inputs.
pub(crate) const CANVAS_PROBE_JS: &str = r##"(() => {
	const canvases = Array.from(document.querySelectorAll('canvas'));
	let hasWebgl = false;
	for (const c of canvases) {
		try {
			if (c.getContext('webgl') || c.getContext('webgl2')) { hasWebgl = true; break; }
		} catch (e) {}
	}
	return {
		canvasCount: canvases.length,
		hasWebgl,
		textChars: document.body ? document.body.innerText.trim().length : 0,
	};
})()"##;

/// Logo and favicon references.
pub(crate) const COLLECT_ASSETS_JS: &str = r##"(() => {
	const favicons = [];
	for (const link of document.querySelectorAll('link[rel*="icon"]')) {
		if (link.href) favicons.push({ href: link.href, rel: link.rel, sizes: link.getAttribute('sizes') });
	}
	let logo = null;
	const logoSel = 'header img, nav img, [class*="logo"] img, img[class*="logo"], img[alt*="logo" i]';
	const img = document.querySelector(logoSel);
	if (img) logo = { src: img.currentSrc || img.src || null, alt: img.alt || null };
	return { logo, favicons };
})()"##;

/// Colors declared in `:hover`/`:focus` rules whose base selector matches
/// one of the first 50 interactive elements.
pub(crate) const HOVER_RULES_JS: &str = r##"(() => {
	const interactive = Array.from(document.querySelectorAll('a, button, input, select, textarea, [tabindex], [role="button"]')).slice(0, 50);
	const out = [];
	for (const sheet of document.styleSheets) {
		let rules;
		try { rules = sheet.cssRules; } catch (e) { continue; }
		if (!rules) continue;
		for (const rule of rules) {
			if (!rule.selectorText || !rule.style) continue;
			const pseudo = rule.selectorText.includes(':hover') ? 'hover'
				: rule.selectorText.includes(':focus') ? 'focus' : null;
			if (!pseudo) continue;
			const base = rule.selectorText.replace(/:(hover|focus)(-visible|-within)?/g, '').trim();
			if (!base) continue;
			let matched = false;
			for (const el of interactive) {
				try { if (el.matches(base)) { matched = true; break; } } catch (e) {}
			}
			if (!matched) continue;
			for (const prop of ['color', 'background-color', 'border-color']) {
				const value = rule.style.getPropertyValue(prop);
				if (value) out.push({ pseudo, property: prop, value: value.trim() });
			}
		}
	}
	return out;
})()"##;

/// Flips the common theme markers ahead of the dark-mode variant pass.
pub(crate) const DARK_MODE_TOGGLE_JS: &str = r##"(() => {
	const root = document.documentElement;
	root.classList.add('dark');
	root.setAttribute('data-theme', 'dark');
	root.setAttribute('data-mode', 'dark');
	if (document.body) document.body.classList.add('dark');
	return true;
})()"##;
