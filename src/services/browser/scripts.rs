// JavaScript injected into pages loaded by the Chromium backend.

/// Installed before navigation; records whether the page asks for the
/// user's location while loading.
pub(crate) const GEOLOCATION_HOOK: &str = r#"
(() => {
    window.__silverscanGeolocation = false;
    const geo = navigator.geolocation;
    if (!geo) return;
    const mark = (original) => function (...args) {
        window.__silverscanGeolocation = true;
        return original.apply(geo, args);
    };
    geo.getCurrentPosition = mark(geo.getCurrentPosition);
    geo.watchPosition = mark(geo.watchPosition);
})();
"#;

/// Collects the rendered measurements behind `PageSignals`.
pub(crate) const PAGE_SIGNALS: &str = r#"
(async () => {
    const describe = (el) =>
        el.tagName.toLowerCase()
        + (el.id ? '#' + el.id : '')
        + (typeof el.className === 'string' && el.className ? '.' + el.className.split(' ')[0] : '');

    const targets = document.querySelectorAll('a, button, input[type="button"], input[type="submit"]');
    const smallTargets = [];
    targets.forEach((el) => {
        const rect = el.getBoundingClientRect();
        if (rect.width < 44 || rect.height < 44) {
            smallTargets.push({
                node: {
                    nodeLabel: el.textContent.trim().substring(0, 50) || el.tagName.toLowerCase(),
                    selector: describe(el),
                    path: el.tagName.toLowerCase(),
                },
                width: Math.round(rect.width),
                height: Math.round(rect.height),
            });
        }
    });

    const textNodes = document.querySelectorAll('p, span, div, li, td, th, a, button, label');
    const smallText = [];
    textNodes.forEach((el) => {
        const size = parseFloat(window.getComputedStyle(el).fontSize);
        const text = el.textContent.trim();
        if (size < 16 && text) {
            smallText.push({
                textSnippet: text.substring(0, 100) || 'Text element',
                containerSelector: describe(el),
                fontSize: size.toFixed(1) + 'px',
            });
        }
    });

    const lcpMs = await new Promise((resolve) => {
        let latest = 0;
        try {
            const observer = new PerformanceObserver((list) => {
                for (const entry of list.getEntries()) {
                    latest = entry.renderTime || entry.loadTime || entry.startTime;
                }
            });
            observer.observe({ type: 'largest-contentful-paint', buffered: true });
            setTimeout(() => { observer.disconnect(); resolve(latest); }, 250);
        } catch (e) {
            resolve(0);
        }
    });

    return {
        tapTargets: { total: targets.length, failing: smallTargets.length, items: smallTargets.slice(0, 50) },
        textElements: { total: textNodes.length, failing: smallText.length, items: smallText.slice(0, 50) },
        lcpMs,
        geolocationRequested: window.__silverscanGeolocation === true,
    };
})()
"#;
